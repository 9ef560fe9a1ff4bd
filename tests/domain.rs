use chrono::{Duration, Utc};
use food_storefront_api::{
    cart::{Cart, CartError, MAX_LINE_QUANTITY},
    models::{OrderStatus, StatusFilter, relative_time},
    pricing::{self, OrderTotals},
    seed,
    signup::is_price_text,
};

#[test]
fn tax_rounds_half_up_to_the_cent() {
    assert_eq!(pricing::tax(2695), 216);
    assert_eq!(pricing::tax(1000), 80);
    // 6.25 * 8% = 0.50
    assert_eq!(pricing::tax(625), 50);
    // 0.06 * 8% = 0.0048
    assert_eq!(pricing::tax(6), 0);
    assert_eq!(pricing::tax(0), 0);
}

#[test]
fn cart_adjust_clamps_and_prunes() -> anyhow::Result<()> {
    let menu = seed::restaurants().remove(0).menu;
    let mut cart = Cart::new();
    assert!(cart.is_empty());

    cart.add(&menu[0])?;
    cart.add(&menu[0])?;
    cart.add(&menu[3])?;
    assert_eq!(cart.lines().len(), 2);
    assert_eq!(cart.quantity_of(menu[0].id), 2);
    assert_eq!(cart.subtotal(), 899 * 2 + 399);

    assert_eq!(cart.adjust(menu[0].id, -5)?, 0);
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.adjust(999, 1)?, 0);

    let totals = OrderTotals::for_lines(cart.lines());
    assert_eq!(totals.total, 399 + 299 + 32);
    Ok(())
}

#[test]
fn cart_line_quantity_is_capped() -> anyhow::Result<()> {
    let menu = seed::restaurants().remove(0).menu;
    let mut cart = Cart::new();
    cart.add(&menu[0])?;

    assert_eq!(cart.adjust(menu[0].id, i32::MAX), Err(CartError::QuantityLimit));
    assert_eq!(cart.quantity_of(menu[0].id), 1);

    assert_eq!(cart.adjust(menu[0].id, MAX_LINE_QUANTITY as i32 - 1)?, MAX_LINE_QUANTITY);
    assert_eq!(cart.add(&menu[0]).unwrap_err(), CartError::QuantityLimit);
    assert_eq!(cart.quantity_of(menu[0].id), MAX_LINE_QUANTITY);

    assert_eq!(cart.adjust(menu[0].id, i32::MIN)?, 0);
    assert!(cart.is_empty());
    Ok(())
}

#[test]
fn status_table() {
    assert_eq!(OrderStatus::New.next(), Some(OrderStatus::Preparing));
    assert_eq!(OrderStatus::Delivered.next(), Some(OrderStatus::Completed));
    assert_eq!(OrderStatus::Completed.next(), None);

    assert_eq!(
        OrderStatus::Ready.transitions(),
        vec![OrderStatus::Delivered, OrderStatus::Cancelled]
    );
    assert!(OrderStatus::Cancelled.transitions().is_empty());
    assert!(OrderStatus::Preparing.transition(OrderStatus::New).is_err());

    let labels: Vec<String> = OrderStatus::New.actions().into_iter().map(|a| a.label).collect();
    assert_eq!(labels, vec!["Mark as Preparing", "Cancel"]);
}

#[test]
fn status_filter_parsing() {
    assert_eq!("All".parse::<StatusFilter>(), Ok(StatusFilter::All));
    assert_eq!("".parse::<StatusFilter>(), Ok(StatusFilter::All));
    assert_eq!(
        "ready".parse::<StatusFilter>(),
        Ok(StatusFilter::Only(OrderStatus::Ready))
    );
    assert!("Shipped".parse::<StatusFilter>().is_err());
    assert!(StatusFilter::All.matches(OrderStatus::Cancelled));
    assert!(!StatusFilter::Only(OrderStatus::New).matches(OrderStatus::Ready));
}

#[test]
fn relative_time_labels() {
    let now = Utc::now();
    assert_eq!(relative_time(now, now), "just now");
    assert_eq!(relative_time(now - Duration::minutes(1), now), "1 minute ago");
    assert_eq!(relative_time(now - Duration::minutes(25), now), "25 minutes ago");
    assert_eq!(relative_time(now - Duration::minutes(120), now), "2 hours ago");
    assert_eq!(relative_time(now - Duration::days(3), now), "3 days ago");
}

#[test]
fn price_text_accepts_a_single_decimal_point() {
    for ok in ["", "8", "8.99", ".5", "10."] {
        assert!(is_price_text(ok), "{ok:?} should be accepted");
    }
    for bad in ["1.2.3", "abc", "-1", "1,50", "$5"] {
        assert!(!is_price_text(bad), "{bad:?} should be rejected");
    }
}
