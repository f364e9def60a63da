//! Rendering for the terminal `Submitted` state. Stateless: the inputs
//! are the stored order id and static follow-up copy.

/// Confirmation body shown after a successful capture. The order id line
/// is included only when the provider returned one.
pub fn confirmation_text(order_id: Option<&str>) -> String {
    let mut out = String::from("Registration received — check your email\n");
    out.push_str("Thank you! A confirmation email has been sent with your session details.\n");
    if let Some(order_id) = order_id {
        out.push_str(&format!("Your PayPal receipt / Order ID is {order_id}.\n"));
    }
    out.push_str("If you don't see the message, check spam or contact our office.\n");
    out
}
