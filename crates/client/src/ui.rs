//! The presentation seam.
//!
//! The editor never renders anything itself. It reports failures, asks for
//! confirmation and requests scrolling through this trait.

pub trait UserInterface {
    /// Show a blocking message to the user.
    fn alert(&mut self, message: &str);

    /// Ask a blocking yes/no question. Returns `true` on "yes".
    fn confirm(&mut self, question: &str) -> bool;

    /// Bring the edit form into view.
    fn scroll_to_top(&mut self);
}
