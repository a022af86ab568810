/// Which view the app is currently showing.
///
/// Navigation is an in-memory state change, not routing: there is no URL
/// involved. Pages are also addressable by a string slug so navigation
/// tables (header, footer) can stay plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Login,
    Admin,
    Shop,
    ProductDetail,
    Cart,
    Checkout,
    OrderSuccess,
    About,
    Blog,
    BlogDetail,
    Contact,
}

impl Page {
    /// Resolve a slug to its page. Unknown slugs land on `Home` so a stale
    /// or mistyped identifier can never strand the UI.
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "login" => Self::Login,
            "admin" => Self::Admin,
            "shop" => Self::Shop,
            "product-detail" => Self::ProductDetail,
            "cart" => Self::Cart,
            "checkout" => Self::Checkout,
            "order-success" => Self::OrderSuccess,
            "about" => Self::About,
            "blog" => Self::Blog,
            "blog-detail" => Self::BlogDetail,
            "contact" => Self::Contact,
            _ => Self::Home,
        }
    }

    /// The slug that resolves back to this page.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Admin => "admin",
            Self::Shop => "shop",
            Self::ProductDetail => "product-detail",
            Self::Cart => "cart",
            Self::Checkout => "checkout",
            Self::OrderSuccess => "order-success",
            Self::About => "about",
            Self::Blog => "blog",
            Self::BlogDetail => "blog-detail",
            Self::Contact => "contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PAGES: [Page; 12] = [
        Page::Home,
        Page::Login,
        Page::Admin,
        Page::Shop,
        Page::ProductDetail,
        Page::Cart,
        Page::Checkout,
        Page::OrderSuccess,
        Page::About,
        Page::Blog,
        Page::BlogDetail,
        Page::Contact,
    ];

    #[test]
    fn test_every_slug_round_trips() {
        for page in ALL_PAGES {
            assert_eq!(Page::from_slug(page.slug()), page);
        }
    }

    #[test]
    fn test_unknown_slug_falls_back_to_home() {
        assert_eq!(Page::from_slug("warehouse"), Page::Home);
        assert_eq!(Page::from_slug(""), Page::Home);
        assert_eq!(Page::from_slug("SHOP"), Page::Home);
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }
}
