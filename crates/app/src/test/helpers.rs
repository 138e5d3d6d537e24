//! Test Helpers

use avaria::{discounts::DiscountPercent, registration::RegistrationDraft};

use crate::{domain::products::ProductsService, test::TestContext};

/// A complete draft for the catalog product `code`.
pub(crate) fn draft(
    ctx: &TestContext,
    code: &str,
    discount: u16,
) -> Result<RegistrationDraft, Box<dyn std::error::Error>> {
    Ok(RegistrationDraft {
        product: Some(
            ctx.products
                .find_by_code(code)
                .ok_or_else(|| format!("no product {code}"))?,
        ),
        serial_number: format!("SN-{code}-{discount:03}"),
        damage: "Caixa danificada.".to_string(),
        discount: DiscountPercent::new(discount)?,
        seller: "Maria Santos".to_string(),
        photo_url: None,
    })
}
