use crate::cli::context::{display_id, CLIContext};
use crate::model::*;
use crate::ops::*;
use crate::queries::*;

pub fn list(ctx: &CLIContext) {
    let members = member_queries::all_members(&ctx.conn).unwrap_or_default();
    if members.is_empty() {
        println!("No members yet. Use 'join' to register one.");
        return;
    }

    println!("Members ({}):", members.len());
    for member in &members {
        println!(
            "  #{} {} ({} open orders)",
            display_id(member.id()),
            member.name(),
            member_queries::active_order_count(member)
        );
    }
}

pub fn show(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: show <name>");
        return;
    }
    let Some(member) = ctx.find_member(args) else {
        return;
    };

    println!();
    println!("Id: {}", display_id(member.id()));
    println!("Name: {}", member.name());
    match member.address() {
        Some(addr) => println!("Address: {}", addr),
        None => println!("Address: (none)"),
    }
    let audit = member.audit();
    println!(
        "Joined: {}{}",
        audit.created_at.format("%Y-%m-%d %H:%M"),
        audit.created_by.as_deref().map(|by| format!(" by {}", by)).unwrap_or_default()
    );

    if member.orders().is_empty() {
        println!("Orders: (none)");
    } else {
        println!("Orders:");
        for order in member.orders() {
            println!(
                "  #{} {} {}",
                display_id(order.id),
                order.order_date.format("%Y-%m-%d %H:%M"),
                order.status.display_name()
            );
        }
    }
    println!();
}

pub fn join(ctx: &CLIContext, args: &str) {
    let name = if !args.is_empty() {
        args.to_string()
    } else {
        match ctx.prompt("Name: ") {
            Some(s) if !s.is_empty() => s,
            _ => {
                println!("Name cannot be empty.");
                return;
            }
        }
    };

    println!("Address (press Enter to skip each part):");
    let city = ctx.prompt("  City: ").unwrap_or_default();
    let street = ctx.prompt("  Street: ").unwrap_or_default();
    let zipcode = ctx.prompt("  Zipcode: ").unwrap_or_default();
    let address = Some(Address::new(city, street, zipcode));

    match member_ops::join(&ctx.conn, ctx.actor(), &name, address) {
        Ok(member) => println!("Joined: #{} {}", display_id(member.id()), member.name()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn rename(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: rename <name>");
        return;
    }
    let Some(member) = ctx.find_member(args) else {
        return;
    };
    let Some(id) = member.id() else {
        return;
    };

    let new_name = ctx.prompt(&format!("New name [{}]: ", member.name())).unwrap_or_default();
    if new_name.is_empty() {
        println!("Unchanged.");
        return;
    }

    match member_ops::rename(&ctx.conn, ctx.actor(), id, &new_name) {
        Ok(m) => println!("Renamed to {}", m.name()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn remove(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: remove <name>");
        return;
    }
    let Some(member) = ctx.find_member(args) else {
        return;
    };
    let Some(id) = member.id() else {
        return;
    };

    let confirm = ctx.prompt(&format!("Remove {}? (y/N): ", member.name())).unwrap_or_default();
    if !confirm.eq_ignore_ascii_case("y") {
        println!("Cancelled.");
        return;
    }

    match member_ops::remove(&ctx.conn, id) {
        Ok(()) => println!("Removed {}", member.name()),
        Err(e) => ctx.print_error(&e),
    }
}
