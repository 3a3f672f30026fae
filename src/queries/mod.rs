pub mod member_queries;
