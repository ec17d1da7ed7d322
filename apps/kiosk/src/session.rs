//! # Session Loop
//!
//! The kiosk's event loop: read a line, apply it to the cart, draw the
//! new state.
//!
//! ## Event Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │   stdin line ──► input::parse ──► Cart mutation ──► render       │
//! │                      │                  │                        │
//! │                      │ parse error      │ bad item number        │
//! │                      ▼                  ▼                        │
//! │                  tell the user, skip the redraw                  │
//! │                  (cart state did not change)                     │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One frame per state change and one initial frame, so the number of
//! renders equals the number of successful gestures plus one.

use std::io::{self, BufRead};

use tracing::{debug, warn};

use bento_core::{Cart, CartSnapshot, Renderer};

use crate::input::{self, Action};

/// Runs one ordering session to completion.
///
/// Draws the opening frame, then applies gestures until the customer
/// quits or the input closes. Returns the final cart so the caller can
/// log what the session amounted to.
///
/// ## Errors
/// Only input I/O failures surface as errors. Rejected lines and bad
/// item numbers are reported to the customer and the loop continues.
pub fn run<R, D>(mut cart: Cart, renderer: &mut D, mut lines: R) -> io::Result<Cart>
where
    R: BufRead,
    D: Renderer,
{
    renderer.render(&CartSnapshot::from(&cart));

    let mut line = String::new();
    loop {
        line.clear();
        if lines.read_line(&mut line)? == 0 {
            debug!("input closed, ending session");
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let action = match input::parse(&line) {
            Ok(action) => action,
            Err(error) => {
                warn!(%error, "rejected input line");
                println!("{error}");
                continue;
            }
        };

        let outcome = match action {
            Action::Quit => break,
            Action::Help => {
                print_help();
                continue;
            }
            Action::Add(index) => cart.increment(index),
            Action::Remove(index) => cart.decrement(index),
        };

        match outcome {
            Ok(()) => {
                debug!(total = %cart.order_total(), "cart updated");
                renderer.render(&CartSnapshot::from(&cart));
            }
            Err(error) => {
                // State is untouched, so the current frame still holds
                warn!(%error, "rejected cart mutation");
                println!("{error}");
            }
        }
    }

    Ok(cart)
}

fn print_help() {
    println!("commands:");
    println!("  + <item>   add one of that item");
    println!("  - <item>   remove one of that item");
    println!("  h          show this help");
    println!("  q          end the session");
}
