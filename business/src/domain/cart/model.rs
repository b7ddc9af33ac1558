/// A cart line as the backend last reported it.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: i64,
    pub product_id: i64,
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
    pub quantity: u32,
}

/// Mirror of the server-side cart. Never merged locally: every successful
/// mutation replaces the whole value with the server's answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub total_price: f64,
}

impl Cart {
    pub fn new(items: Vec<CartItem>, total_price: f64) -> Self {
        Self { items, total_price }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_by_product(&self, product_id: i64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// Sum of quantities, for badges and summaries.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Absolute quantity that results from applying `delta` to the line for
    /// `product_id`. `None` when the product is not in the cart or the result
    /// would be negative.
    pub fn target_quantity(&self, product_id: i64, delta: i64) -> Option<u32> {
        let item = self.find_by_product(product_id)?;
        let target = i64::from(item.quantity).checked_add(delta)?;
        u32::try_from(target).ok()
    }
}
