//! Fixed display strings shared by every rendered page.

/// Product name shown in the page header.
pub const PRODUCT_NAME: &str = "OPR Army Forge";

/// Static footer caption.
pub const FOOTER_CAPTION: &str = "Exportez votre liste en HTML";
