//! Basic statement building: filters, parameters, pretty output.
//!
//! Run with: cargo run --example basic

use sqlforge::prelude::*;
use sqlforge::select;

fn main() -> SqlResult<()> {
    let users = Table::new("users");
    let first_name = users.column("first_name");
    let age = users.column("age");

    let query = select!(&first_name, &age)
        .from(users.alias("us"))?
        .where_(
            first_name
                .ne(param("firstname")?)
                .and(age.eq(param("age")?))
                .and(age.eq(18)),
        )?
        .build();

    println!("Basic query:");
    println!("SQL: {}", query.to_sql()?);
    println!("Pretty:\n{}", query.to_pretty_sql()?);

    let paged = select!(&first_name)
        .from(&users)?
        .where_(age.ge(21).and(first_name.like("J%")))?
        .order_by([first_name.asc()])?
        .limit(20)?
        .offset(40)?
        .build();

    println!("\nPaged query:");
    println!("SQL: {}", paged.to_sql()?);
    println!("Pretty:\n{}", paged.to_pretty_sql()?);

    Ok(())
}
