//! Development fixtures.
//!
//! Deterministic data the memory backend is seeded with. Ids and
//! timestamps are fixed so tests can reference records directly.

use mandi_commerce::catalog::{Category, Product};
use mandi_commerce::ids::{OrderId, ProductId, UserId};
use mandi_commerce::money::Rupees;
use mandi_commerce::orders::{Order, OrderItem, OrderStatus, OrderType, PaymentMethod};
use mandi_commerce::vendors::{StockStatus, Vendor, VendorListing};
use mandi_commerce::ListingId;

/// Fixed timestamp stamped on all seed records.
const SEED_TIMESTAMP: i64 = 1_700_000_000;

fn product(
    id: &str,
    name: &str,
    category: Category,
    price: i64,
    mandi_price: i64,
    stock: i64,
    image_url: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category,
        price: Rupees(price),
        stock,
        mandi_price: Some(Rupees(mandi_price)),
        image_url: Some(image_url.to_string()),
        created_at: SEED_TIMESTAMP,
        updated_at: SEED_TIMESTAMP,
    }
}

/// The seed product catalog.
pub fn products() -> Vec<Product> {
    use Category::{Fruit, Vegetable};
    vec![
        product("1", "Fresh Tomatoes", Vegetable, 40, 35, 50,
            "https://upload.wikimedia.org/wikipedia/commons/8/89/Tomato_je.jpg"),
        product("2", "Green Spinach", Vegetable, 25, 20, 40,
            "https://images.unsplash.com/photo-1576045057995-568f588f82fb?w=200&h=200&fit=crop"),
        product("3", "Fresh Apples", Fruit, 120, 100, 30,
            "https://images.unsplash.com/photo-1560806887-1e4cd0b6cbd6?w=200&h=200&fit=crop"),
        product("4", "Bananas", Fruit, 60, 45, 60,
            "https://images.unsplash.com/photo-1571771894821-ce9b6c11b08e?w=200&h=200&fit=crop"),
        product("5", "Carrots", Vegetable, 35, 28, 45,
            "https://images.unsplash.com/photo-1445282768818-728615cc910a?w=200&h=200&fit=crop"),
        product("6", "Bell Peppers", Vegetable, 80, 65, 25,
            "https://images.unsplash.com/photo-1563565375-f3fdfdbefa83?w=200&h=200&fit=crop"),
        product("7", "Fresh Oranges", Fruit, 90, 75, 35,
            "https://images.unsplash.com/photo-1547514701-42782101795e?w=200&h=200&fit=crop"),
        product("8", "Broccoli", Vegetable, 70, 55, 20,
            "https://images.unsplash.com/photo-1459411621453-7b03977f4bfc?w=200&h=200&fit=crop"),
        product("9", "Fresh Grapes", Fruit, 150, 120, 25,
            "https://images.unsplash.com/photo-1537640538966-79f369143f8f?w=200&h=200&fit=crop"),
        product("10", "Onions", Vegetable, 30, 25, 80,
            "https://images.unsplash.com/photo-1518977676601-b53f82aba655?w=200&h=200&fit=crop"),
        product("11", "Fresh Mangoes", Fruit, 200, 180, 15,
            "https://images.unsplash.com/photo-1553279768-865429fa0078?w=200&h=200&fit=crop"),
        product("12", "Potatoes", Vegetable, 25, 20, 100,
            "https://images.unsplash.com/photo-1518977676601-b53f82aba655?w=200&h=200&fit=crop"),
        product("13", "Cauliflower", Vegetable, 30, 25, 35,
            "https://images.unsplash.com/photo-1568584711271-61c3b99d6e6d?w=200&h=200&fit=crop"),
        product("14", "Green Beans", Vegetable, 40, 35, 30,
            "https://images.unsplash.com/photo-1506806732259-39c2d0268443?w=200&h=200&fit=crop"),
        product("15", "Cucumber", Vegetable, 22, 18, 55,
            "https://images.unsplash.com/photo-1449300079323-02e209d9d3a6?w=200&h=200&fit=crop"),
        product("16", "Eggplant", Vegetable, 35, 30, 40,
            "https://images.unsplash.com/photo-1659261200833-ec8761558af7?w=200&h=200&fit=crop"),
        product("17", "Fresh Lemons", Fruit, 60, 50, 45,
            "https://images.unsplash.com/photo-1590502593747-42a996133562?w=200&h=200&fit=crop"),
        product("18", "Cabbage", Vegetable, 18, 15, 50,
            "https://images.unsplash.com/photo-1594282486552-05b4d80fbb9f?w=200&h=200&fit=crop"),
        product("19", "Radish", Vegetable, 15, 12, 35,
            "https://images.unsplash.com/photo-1595273670150-bd0c3c392e46?w=200&h=200&fit=crop"),
        product("20", "Green Peas", Vegetable, 50, 45, 30,
            "https://images.unsplash.com/photo-1587735243615-c03f25aaff15?w=200&h=200&fit=crop"),
        product("21", "Sweet Corn", Vegetable, 25, 22, 40,
            "https://images.unsplash.com/photo-1551754655-cd27e38d2076?w=200&h=200&fit=crop"),
        product("22", "Pumpkin", Vegetable, 20, 18, 25,
            "https://images.unsplash.com/photo-1570197788417-0e82375c9371?w=200&h=200&fit=crop"),
        product("23", "Fresh Pineapple", Fruit, 40, 35, 20,
            "https://images.unsplash.com/photo-1550258987-190a2d41a8ba?w=200&h=200&fit=crop"),
        product("24", "Watermelon", Fruit, 15, 12, 30,
            "https://images.unsplash.com/photo-1571771894821-ce9b6c11b08e?w=200&h=200&fit=crop"),
        product("25", "Papaya", Fruit, 30, 25, 25,
            "https://images.unsplash.com/photo-1617112848923-cc2234396a8d?w=200&h=200&fit=crop"),
        product("26", "Bottle Gourd", Vegetable, 25, 20, 30,
            "https://images.unsplash.com/photo-1628773822503-930a7eaecf80?w=200&h=200&fit=crop"),
        product("27", "Bitter Gourd", Vegetable, 45, 40, 20,
            "https://images.unsplash.com/photo-1628773822503-930a7eaecf80?w=200&h=200&fit=crop"),
        product("28", "Lady Finger", Vegetable, 40, 35, 35,
            "https://images.unsplash.com/photo-1628773822503-930a7eaecf80?w=200&h=200&fit=crop"),
    ]
}

/// The seed order history.
pub fn orders() -> Vec<Order> {
    vec![Order {
        id: OrderId::new("order_1"),
        user_id: UserId::new("user_1"),
        location: "123 Main St, Amritsar".to_string(),
        items: vec![OrderItem::new(
            ProductId::new("1"),
            "Fresh Tomatoes",
            2,
            Rupees(40),
        )],
        total_cost: Rupees(80),
        status: OrderStatus::Pending,
        order_type: OrderType::Delivery,
        payment_method: PaymentMethod::Cod,
        created_at: SEED_TIMESTAMP,
        updated_at: SEED_TIMESTAMP,
    }]
}

/// The seed vendor roster. A mix of legacy vendors (city encoded in the
/// id) and newer records with a structured city field.
pub fn vendors() -> Vec<Vendor> {
    vec![
        Vendor::legacy("amritsarvendor1"),
        Vendor::legacy("amritsarvendor2"),
        Vendor::new("ludhianavendor1", "Ludhiana"),
        Vendor::new("jalandharvendor1", "Jalandhar"),
        Vendor::legacy("jaipurvendor1"),
        Vendor::new("v-gurgaon-7", "Gurgaon"),
    ]
}

fn listing(
    id: &str,
    vendor_id: &str,
    name: &str,
    price: i64,
    stock_status: StockStatus,
) -> VendorListing {
    VendorListing {
        id: ListingId::new(id),
        vendor_id: vendor_id.into(),
        name: name.to_string(),
        price: Rupees(price),
        stock_status,
    }
}

/// The seed vendor price listings.
pub fn vendor_listings() -> Vec<VendorListing> {
    use StockStatus::{InStock, OutOfStock};
    vec![
        listing("l1", "amritsarvendor1", "Fresh Onions", 20, InStock),
        listing("l2", "amritsarvendor2", "Onions", 24, InStock),
        listing("l3", "amritsarvendor1", "Fresh Tomatoes", 32, InStock),
        listing("l4", "amritsarvendor2", "Tomatoes", 36, InStock),
        listing("l5", "amritsarvendor1", "Potatoes", 18, InStock),
        listing("l6", "amritsarvendor2", "Green Spinach", 16, OutOfStock),
        listing("l7", "ludhianavendor1", "Fresh Tomatoes", 30, InStock),
        listing("l8", "ludhianavendor1", "Carrots", 24, InStock),
        listing("l9", "jalandharvendor1", "Cauliflower", 22, InStock),
        listing("l10", "jaipurvendor1", "Fresh Tomatoes", 28, InStock),
        listing("l11", "v-gurgaon-7", "Lady Finger", 30, InStock),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandi_commerce::vendors::normalize_name;
    use std::collections::HashSet;

    #[test]
    fn test_product_ids_are_unique() {
        let products = products();
        let mut ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_every_listing_has_a_vendor() {
        let vendors = vendors();
        for listing in vendor_listings() {
            assert!(
                vendors.iter().any(|v| v.id == listing.vendor_id),
                "orphan listing {}",
                listing.id
            );
        }
    }

    #[test]
    fn test_listing_names_join_against_catalog() {
        // Listing names may differ in branding ("Fresh Onions" vs
        // "Onions") but must normalize to a key some catalog product
        // also normalizes to, or the price comparison silently drops
        // them.
        let catalog_keys: HashSet<String> =
            products().iter().map(|p| normalize_name(&p.name)).collect();
        for listing in vendor_listings() {
            assert!(
                catalog_keys.contains(&normalize_name(&listing.name)),
                "listing '{}' has no catalog counterpart",
                listing.name
            );
        }
    }

    #[test]
    fn test_all_vendor_cities_resolve() {
        for vendor in vendors() {
            assert!(vendor.city().is_some(), "unresolvable city for {}", vendor.id);
        }
    }
}
