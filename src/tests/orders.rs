use crate::error::CatalogError;
use crate::orders::{ActionHistory, Cart, Customer, OrderQueue, OrderStatus, SalesMatrix};
use crate::scheme::Product;

fn customer(name: &str) -> Customer {
    Customer::new(name, "5555-0000", "Zona 1")
}

#[test]
fn cart_totals_and_rejects_zero_quantity() {
    let mut cart = Cart::new();
    let item = cart.add(Product::new(1, "Vinilo Tornasol", 30.0), 2).unwrap();
    assert_eq!(item.subtotal, 60.0);
    cart.add(Product::new(2, "Sticker", 12.5), 4).unwrap();
    assert!(matches!(cart.add(Product::new(3, "Cromo", 30.0), 0), Err(CatalogError::InvalidQuantity(0))));
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total(), 110.0);
}

#[test]
fn queue_is_fifo_and_checkout_empties_the_cart() {
    let mut queue = OrderQueue::new();
    let mut cart = Cart::new();
    assert!(matches!(queue.checkout(&mut cart, customer("Ana")), Err(CatalogError::EmptyCart)));

    cart.add(Product::new(1, "Vinilo Tornasol", 30.0), 1).unwrap();
    let first_id = queue.checkout(&mut cart, customer("Ana")).unwrap().id;
    assert!(cart.is_empty());

    cart.add(Product::new(2, "Sticker", 10.0), 3).unwrap();
    let second_id = queue.checkout(&mut cart, customer("Beto")).unwrap().id;
    assert_eq!((first_id, second_id), (1, 2));
    assert_eq!(queue.len(), 2);

    let first = queue.next().unwrap();
    assert_eq!(first.customer.name, "Ana");
    assert_eq!(first.status, OrderStatus::Pending);
    queue.requeue(first);

    let next = queue.next().unwrap();
    assert_eq!(next.customer.name, "Beto");
    assert_eq!(next.total, 30.0);
    assert_eq!(queue.processed(), 0);
    let processed = queue.mark_processed(next);
    assert_eq!(processed.status, OrderStatus::Processed);
    assert_eq!(queue.processed(), 1);

    let names: Vec<&str> = queue.pending().map(|o| o.customer.name.as_str()).collect();
    assert_eq!(names, vec!["Ana"]);
}

#[test]
fn invoice_layout() {
    let mut queue = OrderQueue::new();
    let mut cart = Cart::new();
    cart.add(Product::new(6, "Vinilo Especial Dorado Espejo", 30.0), 2).unwrap();
    cart.add(Product::new(1, "Sticker Vinilo de Corte 15x15cm", 20.0), 1).unwrap();
    let order = queue.checkout(&mut cart, customer("Caro")).unwrap();

    let invoice = order.invoice();
    let lines: Vec<&str> = invoice.lines().collect();
    assert_eq!(lines[0], "Invoice #1");
    assert_eq!(lines[1], "Customer: Caro");
    assert_eq!(lines[2], format!("Date: {}", order.created_at));
    assert_eq!(lines[3], "-".repeat(40));
    assert_eq!(lines[4], "Vinilo Especial Dorado Espejo x2 @ Q30.00 - Q60.00");
    assert_eq!(lines[5], "Sticker Vinilo de Corte 15x15cm x1 @ Q20.00 - Q20.00");
    assert_eq!(lines[6], "-".repeat(40));
    assert_eq!(lines[7], "Total: Q80.00");
    assert_eq!(order.created_at.len(), "2025-01-01 00:00:00".len());
}

#[test]
fn history_is_newest_first() {
    let mut history = ActionHistory::new();
    for i in 0..12 {
        history.record(&format!("action {i}"));
    }
    let latest: Vec<&str> = history.latest(10).collect();
    assert_eq!(latest.len(), 10);
    assert!(latest[0].ends_with("] action 11"));
    assert!(latest[9].ends_with("] action 2"));
    assert_eq!(history.len(), 12);
}

#[test]
fn sales_matrix_totals() {
    let mut matrix = SalesMatrix::new(3);
    matrix.record_sale(0, 0, 5).unwrap();
    matrix.record_sale(0, 6, 7).unwrap();
    matrix.record_sale(1, 11, 20).unwrap();
    matrix.record_sale(1, 11, 1).unwrap();

    assert_eq!(matrix.product_total(0), 12);
    assert_eq!(matrix.product_total(1), 21);
    assert_eq!(matrix.product_total(2), 0);
    assert_eq!(matrix.best_month(0), Some(6));
    assert_eq!(matrix.best_month(2), Some(0));
    assert_eq!(matrix.best_seller(), Some((1, 21)));
    assert_eq!(matrix.monthly(1).map(|row| row[11]), Some(21));

    assert!(matches!(matrix.record_sale(3, 0, 1), Err(CatalogError::OutOfRange { what: "product", .. })));
    assert!(matches!(matrix.record_sale(0, 12, 1), Err(CatalogError::OutOfRange { what: "month", .. })));
    assert_eq!(SalesMatrix::new(0).best_seller(), None);
}

#[test]
fn sales_report_line_names_the_best_month() {
    let mut matrix = SalesMatrix::new(2);
    matrix.record_sale(0, 2, 28).unwrap();
    matrix.record_sale(0, 9, 4).unwrap();

    let line = matrix.report_line(0, "Vinilo Tornasol").unwrap();
    assert_eq!(line, format!("{:<30} {:<15} {:<15}", "Vinilo Tornasol", 32, "Mar"));

    let long_name = "Sticker en Papel Adhesivo con Corte Electrónico";
    let line = matrix.report_line(1, long_name).unwrap();
    assert!(line.starts_with("Sticker en Papel Adhesivo con "));
    assert!(line.trim_end().ends_with("Jan"));

    assert!(matrix.report_line(2, "missing").is_none());
}
