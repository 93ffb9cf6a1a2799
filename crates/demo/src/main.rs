use anyhow::Context;
use rust_decimal::Decimal;

use storefront_core::{AggregateRoot, Money, math};
use storefront_products::Product;
use storefront_sales::Order;

fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let mut coffee = Product::with_stock(
        "Café Especial",
        Money::new(Decimal::new(2590, 2), "BRL")?,
        50,
    )?;
    println!("{coffee}");

    coffee.add_stock(20)?;
    coffee.remove_stock(10)?;
    println!("After adjustments: {coffee}");

    // Business-rule failures are reported and the session carries on;
    // anything else is a bug and aborts.
    match coffee.remove_stock(1000) {
        Ok(()) => {}
        Err(e) if e.is_business_rule() => {
            tracing::warn!(product_id = %coffee.id_typed(), error = %e, "stock removal refused");
            println!("Domain rule violation: {e}");
        }
        Err(e) => return Err(e).context("removing stock"),
    }

    let filter = Product::with_stock(
        "Filtro de Papel",
        Money::new(Decimal::new(550, 2), "BRL")?,
        200,
    )?;

    let mut order = Order::new();
    order.add_item(&coffee, 2)?;
    order.add_item(&filter, 5)?;
    tracing::info!(
        order_id = %order.id_typed(),
        lines = order.items().len(),
        version = order.version(),
        "order built"
    );
    println!("{order}");

    let x = 5;
    println!(
        "{x} squared is {} and clamped between 0 and 10 is {}",
        math::square(x),
        math::clamp(x, 0, 10)?
    );

    Ok(())
}
