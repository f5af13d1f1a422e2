use serde::{Deserialize, Serialize};

/// A layout that can be picked as the body of a draft.
#[derive(Debug, Clone, Serialize)]
pub struct ComposerTemplate {
    pub id: &'static str,
    pub name: &'static str,
}

pub const COMPOSER_TEMPLATES: &[ComposerTemplate] = &[
    ComposerTemplate {
        id: "tmp_001",
        name: "Minimalist Welcome",
    },
    ComposerTemplate {
        id: "tmp_002",
        name: "Monthly Newsletter",
    },
    ComposerTemplate {
        id: "tmp_003",
        name: "Seasonal Promotion",
    },
];

pub fn find_composer_template(id: &str) -> Option<&'static ComposerTemplate> {
    COMPOSER_TEMPLATES.iter().find(|template| template.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateCategory {
    Newsletter,
    #[serde(rename = "Product Launch")]
    ProductLaunch,
    Marketing,
    Transactional,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketplaceTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: TemplateCategory,
    pub price: u32,
    pub is_free: bool,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum TemplateSort {
    /// Catalogue order.
    #[default]
    Featured,
    /// Free templates first, catalogue order otherwise.
    Free,
    PriceLowToHigh,
    PriceHighToLow,
}

pub const MARKETPLACE: &[MarketplaceTemplate] = &[
    MarketplaceTemplate {
        id: "1",
        name: "Velvet Newsletter",
        category: TemplateCategory::Newsletter,
        price: 0,
        is_free: true,
        image: "https://images.unsplash.com/photo-1505330622279-bf7d7fc918f4?auto=format&fit=crop&q=80&w=400",
    },
    MarketplaceTemplate {
        id: "2",
        name: "Launch Pro Max",
        category: TemplateCategory::ProductLaunch,
        price: 24,
        is_free: false,
        image: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?auto=format&fit=crop&q=80&w=400",
    },
    MarketplaceTemplate {
        id: "3",
        name: "Midnight Sale",
        category: TemplateCategory::Marketing,
        price: 19,
        is_free: false,
        image: "https://images.unsplash.com/photo-1620641788421-7a1c342ea42e?auto=format&fit=crop&q=80&w=400",
    },
    MarketplaceTemplate {
        id: "4",
        name: "Clean Order Confirmed",
        category: TemplateCategory::Transactional,
        price: 12,
        is_free: false,
        image: "https://images.unsplash.com/photo-1499951360447-b19be8fe80f5?auto=format&fit=crop&q=80&w=400",
    },
    MarketplaceTemplate {
        id: "5",
        name: "SaaS Update v2",
        category: TemplateCategory::ProductLaunch,
        price: 29,
        is_free: false,
        image: "https://images.unsplash.com/photo-1614850523296-d8c1af93d400?auto=format&fit=crop&q=80&w=400",
    },
    MarketplaceTemplate {
        id: "6",
        name: "Minimal Blog Digest",
        category: TemplateCategory::Newsletter,
        price: 0,
        is_free: true,
        image: "https://images.unsplash.com/photo-1499951360447-b19be8fe80f5?auto=format&fit=crop&q=80&w=400",
    },
    MarketplaceTemplate {
        id: "7",
        name: "Black Friday Noir",
        category: TemplateCategory::Marketing,
        price: 45,
        is_free: false,
        image: "https://images.unsplash.com/photo-1550684848-fac1c5b4e853?auto=format&fit=crop&q=80&w=400",
    },
    MarketplaceTemplate {
        id: "8",
        name: "The Minimalist",
        category: TemplateCategory::Newsletter,
        price: 15,
        is_free: false,
        image: "https://images.unsplash.com/photo-1505330622279-bf7d7fc918f4?auto=format&fit=crop&q=80&w=400",
    },
];

/// Marketplace listing, optionally narrowed to one category. All sorts are
/// stable so ties keep catalogue order.
pub fn browse_marketplace(
    category: Option<TemplateCategory>,
    sort: TemplateSort,
) -> Vec<&'static MarketplaceTemplate> {
    let mut templates: Vec<&'static MarketplaceTemplate> = MARKETPLACE
        .iter()
        .filter(|template| category.is_none_or(|c| template.category == c))
        .collect();

    match sort {
        TemplateSort::Featured => {}
        TemplateSort::Free => templates.sort_by_key(|template| !template.is_free),
        TemplateSort::PriceLowToHigh => templates.sort_by_key(|template| template.price),
        TemplateSort::PriceHighToLow => {
            templates.sort_by_key(|template| std::cmp::Reverse(template.price))
        }
    }

    templates
}
