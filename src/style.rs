//! Terminal styling utilities
//!
//! Keeps listing output consistent:
//! - Bold for profile titles
//! - Green for the current-profile marker
//! - Dim for device details

use crossterm::style::Stylize;

/// Extension trait for consistent PAP styling
///
/// # Examples
///
/// ```
/// use pap::style::PapStyle;
///
/// println!("{}", "Headset".title());
/// println!("{}", "[current]".success());
/// ```
pub trait PapStyle: Stylize {
    /// Style for profile titles (bold)
    fn title(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.bold()
    }

    /// Style for positive states like the `[current]` marker (green)
    fn success(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.green()
    }

    /// Style for secondary information like device names (dim)
    fn detail(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.dim()
    }
}

impl<T: Stylize> PapStyle for T {}
