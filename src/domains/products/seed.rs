//! Startup seeding of an empty product table.

use tracing::{debug, info, instrument};

use super::{ProductCreate, ProductRepository, ProductResult};

/// Starter catalog written into an empty store.
pub fn seed_catalog() -> Vec<ProductCreate> {
    [
        ("Phone", "A smartphone", 699.99, 50),
        ("Laptop", "A powerful laptop", 999.99, 30),
        ("Pen", "A blue ink pen", 1.99, 100),
        ("Table", "A wooden table", 199.99, 20),
    ]
    .into_iter()
    .map(|(name, description, price, quantity)| ProductCreate {
        name: name.to_string(),
        description: description.to_string(),
        price,
        quantity,
    })
    .collect()
}

/// Insert the starter catalog if the store holds no products.
///
/// Returns how many products were written.
#[instrument(skip_all)]
pub async fn seed_if_empty(repository: &dyn ProductRepository) -> ProductResult<usize> {
    let existing = repository.count().await?;
    if existing > 0 {
        debug!("Store already holds {} products, skipping seed", existing);
        return Ok(0);
    }

    let catalog = seed_catalog();
    for product in &catalog {
        repository.insert(product).await?;
    }
    info!("Seeded {} products", catalog.len());
    Ok(catalog.len())
}
