//! Validated line items built from store records.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::domain::{
    catalog::models::ProductPurchaseRecord,
    checkout::{cart::CartRequestLine, errors::CheckoutError},
};

/// Prefix every payment provider price reference carries.
pub const PRICE_REFERENCE_PREFIX: &str = "price_";

/// A cart line that passed validation against the product store. Only this
/// module can construct one, so its price reference always comes from a
/// store record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLineItem {
    price_reference: String,
    quantity: u32,
}

impl ValidatedLineItem {
    /// Payment provider price id, exactly as stored.
    #[must_use]
    pub fn price_reference(&self) -> &str {
        &self.price_reference
    }

    /// Units to charge, already clamped to 1..=99.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[cfg(test)]
    pub(crate) fn for_test(price_reference: &str, quantity: u32) -> Self {
        Self {
            price_reference: price_reference.to_owned(),
            quantity,
        }
    }
}

/// The stored reference as-is, when it carries [`PRICE_REFERENCE_PREFIX`].
fn valid_price_reference(reference: Option<&str>) -> Option<&str> {
    reference.filter(|reference| reference.starts_with(PRICE_REFERENCE_PREFIX))
}

/// Validate every cart line against the looked-up store records and build
/// the line items, one per request line and in request order.
///
/// Unknown slugs are reported together. Otherwise the first offending line
/// fails the whole cart.
///
/// # Errors
///
/// [`CheckoutError::UnknownProducts`], [`CheckoutError::NotPurchasable`] or
/// [`CheckoutError::InvalidPriceReference`].
pub fn build_line_items(
    lines: &[CartRequestLine],
    distinct: &[String],
    records: &[ProductPurchaseRecord],
) -> Result<Vec<ValidatedLineItem>, CheckoutError> {
    let by_slug: FxHashMap<&str, &ProductPurchaseRecord> = records
        .iter()
        .map(|record| (record.slug.as_str(), record))
        .collect();

    let missing: SmallVec<[&str; 4]> = distinct
        .iter()
        .map(String::as_str)
        .filter(|slug| !by_slug.contains_key(slug))
        .collect();

    if !missing.is_empty() {
        return Err(CheckoutError::UnknownProducts(
            missing.iter().map(|slug| (*slug).to_owned()).collect(),
        ));
    }

    lines
        .iter()
        .map(|line| {
            let record = by_slug
                .get(line.slug.as_str())
                .ok_or_else(|| CheckoutError::UnknownProducts(vec![line.slug.clone()]))?;

            if !record.is_purchasable {
                return Err(CheckoutError::NotPurchasable(line.slug.clone()));
            }

            let Some(reference) = valid_price_reference(record.price_reference.as_deref()) else {
                return Err(CheckoutError::InvalidPriceReference(line.slug.clone()));
            };

            Ok(ValidatedLineItem {
                price_reference: reference.to_owned(),
                quantity: line.quantity,
            })
        })
        .collect()
}
