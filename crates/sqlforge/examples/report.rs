//! Joins, grouping and aggregates: an order report per customer.
//!
//! Run with: cargo run --example report

use sqlforge::prelude::*;
use sqlforge::select;

fn main() -> SqlResult<()> {
    let customers = Table::new("customers");
    let customer_id = customers.column("id");
    let full_name = customers.column("full_name");

    let orders = Table::new("orders").schema("sales");
    let order_customer = orders.column("customer_id");
    let order_id = orders.column("id");
    let total = orders.column("total_amount");
    let status = orders.column("status");

    let order_count = count_of(&order_id).alias("order_count");
    let total_spent = sum(&total).alias("total_spent");

    let report = select!(&full_name, &order_count, &total_spent)
        .from(&customers)?
        .left_join(
            &orders,
            customer_id
                .eq(&order_customer)
                .and(status.eq("COMPLETED")),
        )?
        .group_by([&full_name])?
        .having(order_count.gt(0))?
        .order_by([total_spent.desc().nulls_last()])?
        .build();

    println!("SQL: {}", report.to_sql()?);
    println!("Pretty:\n{}", report.to_pretty_sql()?);

    Ok(())
}
