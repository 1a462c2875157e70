//! `hygge order` - walk a cart through the full checkout flow.

use crate::output::Output;
use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use console::style;
use hygge_commerce::cart::CartScope;
use hygge_commerce::catalog::Catalog;
use hygge_commerce::checkout::{
    CheckoutFlow, CheckoutGate, Field, OrderSnapshot, PaymentMethod, ShippingMethod,
};
use hygge_commerce::ids::ProductId;
use hygge_commerce::nav::{ConfirmationView, Destination, Navigator};
use std::time::Duration;

#[derive(Args)]
pub struct OrderArgs {
    /// Items to order, as `product-id` or `product-id:quantity` (repeatable)
    #[arg(short, long = "item", default_values_t = [
        "chair-spindle".to_string(),
        "mug-stoneware:2".to_string(),
    ])]
    pub items: Vec<String>,

    /// Shipping method (standard, express, overnight)
    #[arg(short, long, default_value = "standard")]
    pub shipping: String,

    /// Coupon code to apply
    #[arg(long)]
    pub coupon: Option<String>,

    /// Skip the simulated payment-processing delay
    #[arg(long)]
    pub fast: bool,
}

/// Captures the confirmation hand-off from the checkout flow.
#[derive(Default)]
struct CapturedNav {
    destination: Option<Destination>,
    payload: Option<OrderSnapshot>,
}

impl Navigator for CapturedNav {
    fn navigate(&mut self, destination: Destination, payload: Option<OrderSnapshot>) {
        self.destination = Some(destination);
        self.payload = payload;
    }
}

pub async fn run(args: &OrderArgs, catalog: &Catalog, output: &Output) -> Result<()> {
    let shipping = ShippingMethod::from_str(&args.shipping)
        .ok_or_else(|| anyhow!("unknown shipping method: {}", args.shipping))?;

    // Composition root: the cart scope lives for the length of the command.
    let scope = CartScope::default();
    let cart = scope.handle();

    for spec in &args.items {
        let (id, quantity) = parse_item(spec)?;
        let product = catalog
            .get(&id)
            .ok_or_else(|| anyhow!("no such product: {id}"))?;
        cart.add_with_quantity(product, quantity);
        output.debug(&format!("added {quantity} x {}", product.name));
    }

    let mut flow = CheckoutFlow::new(scope.handle());
    if args.fast {
        flow = flow.with_submit_delay(Duration::ZERO);
    }

    if flow.gate() == CheckoutGate::Blocked {
        bail!("cart is empty; nothing to check out");
    }

    output.info(&format!(
        "Cart: {} item(s), subtotal {}",
        cart.count(),
        cart.total().display()
    ));

    // Step 1: address.
    fill_demo_address(&mut flow);
    flow.advance().context("address step failed validation")?;

    // Step 2: shipping.
    flow.select_shipping(shipping);
    flow.advance().context("shipping step failed validation")?;
    output.info(&format!(
        "Shipping: {} ({})",
        shipping.display_name(),
        shipping.delivery_estimate()
    ));

    // Step 3: payment.
    fill_demo_card(&mut flow);
    if let Some(code) = &args.coupon {
        flow.set_coupon_code(code);
        if flow.apply_coupon() {
            output.success(&format!(
                "Coupon \"{}\" applied",
                flow.applied_coupon().unwrap_or_default()
            ));
        }
    }

    let totals = flow.totals();
    output.info(&format!(
        "Subtotal {}  Shipping {}  Tax {}  Total {}",
        totals.subtotal.display(),
        totals.shipping.display(),
        totals.tax.display(),
        totals.total.display()
    ));

    let spinner = output.spinner("Processing payment...");
    let mut nav = CapturedNav::default();
    let result = flow.submit(&mut nav).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    result.context("order submission failed")?;

    match ConfirmationView::from_payload(nav.payload) {
        ConfirmationView::Order(order) => {
            if output.is_json() {
                println!("{}", serde_json::to_string_pretty(&order)?);
                return Ok(());
            }
            print_receipt(&order, output);
        }
        ConfirmationView::NothingToShow => {
            output.info("Nothing to show.");
        }
    }

    Ok(())
}

fn parse_item(spec: &str) -> Result<(ProductId, i64)> {
    match spec.split_once(':') {
        Some((id, qty)) => {
            let quantity: i64 = qty
                .parse()
                .with_context(|| format!("bad quantity in item spec: {spec}"))?;
            Ok((ProductId::new(id), quantity))
        }
        None => Ok((ProductId::new(spec), 1)),
    }
}

fn fill_demo_address(flow: &mut CheckoutFlow) {
    flow.edit(Field::FirstName, "Astrid");
    flow.edit(Field::LastName, "Holm");
    flow.edit(Field::Address, "Nyhavn 17, 1.tv");
    flow.edit(Field::City, "Copenhagen");
    flow.edit(Field::State, "Hovedstaden");
    flow.edit(Field::ZipCode, "1051");
    flow.edit(Field::Country, "Denmark");
    flow.edit(Field::Phone, "+4531123456");
}

fn fill_demo_card(flow: &mut CheckoutFlow) {
    flow.select_payment(PaymentMethod::Card);
    flow.edit(Field::CardNumber, "4242424242424242");
    flow.edit(Field::CardName, "Astrid Holm");
    flow.edit(Field::ExpiryDate, "0928");
    flow.edit(Field::Cvv, "123");
}

fn print_receipt(order: &OrderSnapshot, output: &Output) {
    output.success(&format!(
        "Order {} placed: {} / {}",
        style(&order.order_number).bold(),
        order.payment_status.as_str(),
        order.order_status.as_str()
    ));
    output.line(&format!("  Customer: {}", order.customer_name));
    output.line(&format!("  Ship to:  {}", order.shipping_address.one_line()));
    for item in &order.items {
        output.line(&format!(
            "  {:>2} x {:<24} {:>10}",
            item.quantity,
            item.name,
            item.line_total().display()
        ));
    }
    output.line(&format!(
        "  Total: {} (subtotal {}, shipping {}, tax {})",
        style(order.totals.total.display()).bold(),
        order.totals.subtotal.display(),
        order.totals.shipping.display(),
        order.totals.tax.display()
    ));
}
