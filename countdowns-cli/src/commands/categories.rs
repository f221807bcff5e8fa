use anyhow::Result;
use countdowns_core::Catalog;

pub fn run(catalog: &Catalog) -> Result<()> {
    for category in catalog.categories() {
        println!("{}", category);
    }
    Ok(())
}
