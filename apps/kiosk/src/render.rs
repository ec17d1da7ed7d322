//! # Terminal Frame Renderer
//!
//! Draws one full cart frame per state change. No diffing, no cursor
//! movement: every frame repaints everything, the terminal equivalent of
//! rebuilding the whole widget.
//!
//! ## Frame Layout
//! ```text
//! === Bento Street Kitchen ===
//! * [0] Shawarma Roast Wrap             66   x2
//!   [1] Grilled Salmon Steak            88   x0
//! ---
//! cart: 2 item(s)   total: 132
//! ready for checkout
//! commands: + <item>  - <item>  h  q
//! ```
//!
//! The `*` marker is the "in the cart" highlight. While the order is
//! below the delivery minimum the "ready for checkout" line is replaced
//! by the amount still needed.

use std::io::{self, Write};

use tracing::error;

use bento_core::{CartSnapshot, Renderer};

/// Writes cart frames to any `Write` sink.
///
/// Production hands it stdout; tests hand it a `Vec<u8>` and read the
/// frame back as text.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    store_name: String,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, store_name: impl Into<String>) -> Self {
        ConsoleRenderer {
            out,
            store_name: store_name.into(),
        }
    }

    /// Writes one complete frame.
    fn write_snapshot(&mut self, snapshot: &CartSnapshot) -> io::Result<()> {
        let totals = &snapshot.totals;

        writeln!(self.out)?;
        writeln!(self.out, "=== {} ===", self.store_name)?;

        for (index, row) in snapshot.items.iter().enumerate() {
            let marker = if row.is_selected { '*' } else { ' ' };
            writeln!(
                self.out,
                "{marker} [{index}] {:<28} {:>6}   x{}",
                row.name, row.price, row.selected_quantity
            )?;
        }

        writeln!(self.out, "---")?;
        writeln!(
            self.out,
            "cart: {} item(s)   total: {}",
            totals.selected_item_count, totals.order_total
        )?;

        if totals.meets_delivery_minimum {
            writeln!(self.out, "ready for checkout")?;
        } else {
            writeln!(
                self.out,
                "add {} more to reach the delivery minimum of {}",
                totals.amount_needed_for_delivery, totals.minimum_delivery_amount
            )?;
        }

        writeln!(self.out, "commands: + <item>  - <item>  h  q")?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, snapshot: &CartSnapshot) {
        // A terminal that stopped accepting writes is not worth crashing
        // the session over; log it and keep the cart alive.
        if let Err(error) = self.write_snapshot(snapshot) {
            error!(%error, "failed to draw cart frame");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bento_core::{Cart, MenuItem, Money};

    fn sample_cart() -> Cart {
        Cart::new(
            vec![
                MenuItem::new("Wrap", Money::from_units(66)),
                MenuItem::new("Salmon", Money::from_units(88)),
            ],
            Money::from_units(100),
        )
        .unwrap()
    }

    fn rendered(cart: &Cart) -> String {
        let mut renderer = ConsoleRenderer::new(Vec::new(), "Test Kitchen");
        renderer.render(&CartSnapshot::from(cart));
        String::from_utf8(renderer.out).unwrap()
    }

    #[test]
    fn test_frame_below_minimum_shows_shortfall() {
        let mut cart = sample_cart();
        cart.increment(0).unwrap();

        let frame = rendered(&cart);
        assert!(frame.contains("=== Test Kitchen ==="));
        assert!(frame.contains("cart: 1 item(s)   total: 66"));
        assert!(frame.contains("add 34 more to reach the delivery minimum of 100"));
        assert!(!frame.contains("ready for checkout"));
    }

    #[test]
    fn test_frame_with_minimum_met_is_ready_for_checkout() {
        let mut cart = sample_cart();
        cart.increment(0).unwrap();
        cart.increment(1).unwrap(); // 154, over the threshold

        let frame = rendered(&cart);
        assert!(frame.contains("cart: 2 item(s)   total: 154"));
        assert!(frame.contains("ready for checkout"));
        assert!(!frame.contains("more to reach the delivery minimum"));
    }

    #[test]
    fn test_selected_rows_carry_the_marker() {
        let mut cart = sample_cart();
        cart.increment(1).unwrap();

        let frame = rendered(&cart);
        let wrap_row = frame.lines().find(|l| l.contains("Wrap")).unwrap();
        let salmon_row = frame.lines().find(|l| l.contains("Salmon")).unwrap();

        assert!(wrap_row.starts_with("  [0]"));
        assert!(salmon_row.starts_with("* [1]"));
        assert!(salmon_row.contains("x1"));
    }

    #[test]
    fn test_empty_selection_renders_all_rows() {
        let frame = rendered(&sample_cart());
        assert!(frame.contains("[0] Wrap"));
        assert!(frame.contains("[1] Salmon"));
        assert!(frame.contains("cart: 0 item(s)   total: 0"));
        assert!(frame.contains("add 100 more to reach the delivery minimum of 100"));
    }
}
