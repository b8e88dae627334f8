//! The fixed product catalog and the filtered/sorted card view over it.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use tracing::debug;

use crate::rating::Stars;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Clothing,
    Home,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Electronics, Category::Clothing, Category::Home];

    pub fn as_key(self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Clothing => "clothing",
            Category::Home => "home",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Home => "Home",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Category selector value: everything, or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == category,
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_key(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if key == "all" {
            return Ok(CategoryFilter::All);
        }
        Category::ALL
            .into_iter()
            .find(|category| category.as_key() == key)
            .map(CategoryFilter::Only)
            .ok_or_else(|| anyhow!("unknown category: {key}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Catalog order.
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    /// Highest rated first.
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::None,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Rating,
    ];

    pub fn as_key(self) -> &'static str {
        match self {
            SortKey::None => "default",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Rating => "rating",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "Default",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Rating => "Top Rated",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::PriceAsc => a.price.total_cmp(&b.price),
            SortKey::PriceDesc => b.price.total_cmp(&a.price),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "default" | "none" => Ok(SortKey::None),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "rating" => Ok(SortKey::Rating),
            other => Err(anyhow!("unknown sort key: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub price: f64,
    pub rating: f64,
    pub category: Category,
    pub image: &'static str,
}

pub const PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        name: "Wireless Headphones",
        price: 129.99,
        rating: 4.5,
        category: Category::Electronics,
        image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1170&q=80",
    },
    Product {
        id: 2,
        name: "Smart Watch",
        price: 199.99,
        rating: 4.7,
        category: Category::Electronics,
        image: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1099&q=80",
    },
    Product {
        id: 3,
        name: "Cotton T-Shirt",
        price: 29.99,
        rating: 4.2,
        category: Category::Clothing,
        image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1160&q=80",
    },
    Product {
        id: 4,
        name: "Coffee Maker",
        price: 89.99,
        rating: 4.4,
        category: Category::Home,
        image: "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1170&q=80",
    },
    Product {
        id: 5,
        name: "Running Shoes",
        price: 79.99,
        rating: 4.6,
        category: Category::Clothing,
        image: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1170&q=80",
    },
    Product {
        id: 6,
        name: "Bluetooth Speaker",
        price: 59.99,
        rating: 4.3,
        category: Category::Electronics,
        image: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1137&q=80",
    },
];

/// Products in `category`, reordered by `sort`. The sort is stable and
/// works on a fresh vector of references; `products` is never reordered.
pub fn select(products: &[Product], category: CategoryFilter, sort: SortKey) -> Vec<&Product> {
    let mut selected: Vec<&Product> = products
        .iter()
        .filter(|product| category.matches(product))
        .collect();

    if sort != SortKey::None {
        selected.sort_by(|a, b| sort.compare(a, b));
    }

    debug!(
        category = category.as_key(),
        sort = sort.as_key(),
        count = selected.len(),
        "selected catalog products"
    );
    selected
}

pub fn format_price(price: f64, currency_symbol: &str) -> String {
    format!("{currency_symbol}{price:.2}")
}

/// Everything a product card draws.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    pub price: String,
    pub stars: Stars,
    pub category: &'static str,
}

impl ProductCard {
    pub fn from_product(product: &Product, currency_symbol: &str) -> Self {
        Self {
            id: product.id,
            name: product.name,
            image: product.image,
            price: format_price(product.price, currency_symbol),
            stars: Stars::from_rating(product.rating),
            category: product.category.as_key(),
        }
    }
}

pub fn catalog_view(
    products: &[Product],
    category: CategoryFilter,
    sort: SortKey,
    currency_symbol: &str,
) -> Vec<ProductCard> {
    select(products, category, sort)
        .into_iter()
        .map(|product| ProductCard::from_product(product, currency_symbol))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(products: &[&Product]) -> Vec<&'static str> {
        products.iter().map(|product| product.name).collect()
    }

    #[test]
    fn all_without_sort_is_catalog_order() {
        let selected = select(PRODUCTS, CategoryFilter::All, SortKey::None);
        let ids: Vec<u32> = selected.iter().map(|product| product.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn category_filter_is_exact() {
        let selected = select(PRODUCTS, CategoryFilter::Only(Category::Clothing), SortKey::None);
        assert_eq!(names(&selected), vec!["Cotton T-Shirt", "Running Shoes"]);

        let home = select(PRODUCTS, CategoryFilter::Only(Category::Home), SortKey::None);
        assert_eq!(names(&home), vec!["Coffee Maker"]);
    }

    #[test]
    fn price_sorts_are_monotonic() {
        let asc = select(PRODUCTS, CategoryFilter::All, SortKey::PriceAsc);
        assert!(asc.windows(2).all(|pair| pair[0].price <= pair[1].price));

        let desc = select(PRODUCTS, CategoryFilter::All, SortKey::PriceDesc);
        assert!(desc.windows(2).all(|pair| pair[0].price >= pair[1].price));
        assert_eq!(desc[0].name, "Smart Watch");
    }

    #[test]
    fn rating_sort_is_descending() {
        let sorted = select(PRODUCTS, CategoryFilter::Only(Category::Electronics), SortKey::Rating);
        assert!(sorted.windows(2).all(|pair| pair[0].rating >= pair[1].rating));
        assert_eq!(
            names(&sorted),
            vec!["Smart Watch", "Wireless Headphones", "Bluetooth Speaker"]
        );
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let products = [
            Product {
                id: 10,
                name: "first",
                price: 5.0,
                rating: 3.0,
                category: Category::Home,
                image: "",
            },
            Product {
                id: 11,
                name: "second",
                price: 5.0,
                rating: 3.0,
                category: Category::Home,
                image: "",
            },
        ];
        for sort in SortKey::ALL {
            let selected = select(&products, CategoryFilter::All, sort);
            assert_eq!(names(&selected), vec!["first", "second"]);
        }
    }

    #[test]
    fn cards_format_price_and_stars() {
        let cards = catalog_view(PRODUCTS, CategoryFilter::Only(Category::Home), SortKey::None, "$");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].price, "$89.99");
        assert_eq!(cards[0].category, "home");
        assert_eq!(cards[0].stars, Stars::from_rating(4.4));
        assert_eq!(format_price(5.0, "$"), "$5.00");
    }

    #[test]
    fn parses_selector_values() {
        assert_eq!(
            "electronics".parse::<CategoryFilter>().expect("known"),
            CategoryFilter::Only(Category::Electronics)
        );
        assert_eq!("all".parse::<CategoryFilter>().expect("known"), CategoryFilter::All);
        assert!("toys".parse::<CategoryFilter>().is_err());

        for sort in SortKey::ALL {
            assert_eq!(sort.as_key().parse::<SortKey>().expect("known"), sort);
        }
        assert_eq!("".parse::<SortKey>().expect("blank"), SortKey::None);
        assert!("name".parse::<SortKey>().is_err());
    }
}
