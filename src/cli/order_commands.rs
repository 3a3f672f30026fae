use crate::cli::context::{display_id, CLIContext};
use crate::model::{Id, Order};
use crate::ops::order_ops;

pub fn order(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: order <member name>");
        return;
    }
    let Some(member) = ctx.find_member(args) else {
        return;
    };
    let Some(member_id) = member.id() else {
        return;
    };

    match order_ops::place_order(&ctx.conn, ctx.actor(), member_id) {
        Ok(order) => println!("Order #{} placed for {}", display_id(order.id), member.name()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn cancel(ctx: &CLIContext, args: &str) {
    let Ok(order_id) = Id::<Order>::parse(args.trim_start_matches('#')) else {
        println!("Usage: cancel <order id>");
        return;
    };

    match order_ops::cancel_order(&ctx.conn, ctx.actor(), order_id) {
        Ok(order) => println!("Order #{} {}", order_id, order.status.display_name().to_lowercase()),
        Err(e) => ctx.print_error(&e),
    }
}
