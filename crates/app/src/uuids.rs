//! Typed Uuids

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    marker::PhantomData,
};

use uuid::Uuid;

/// A [`Uuid`] tagged with the catalog row type it identifies, so a
/// collection id can never be passed where a product id is expected.
pub struct TypedUuid<T>(Uuid, PhantomData<fn() -> T>);

impl<T> TypedUuid<T> {
    /// Tag an existing id.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, PhantomData)
    }

    /// Drop the tag.
    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

// Manual impls: derives would demand `T: Clone`/`T: PartialEq` on the marker.
impl<T> Clone for TypedUuid<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedUuid<T> {}

impl<T> Debug for TypedUuid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedUuid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedUuid<T> {}

impl<T> From<Uuid> for TypedUuid<T> {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

impl<T> From<TypedUuid<T>> for Uuid {
    fn from(value: TypedUuid<T>) -> Self {
        value.into_uuid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row;

    #[test]
    fn wraps_and_unwraps_without_loss() {
        let raw = Uuid::now_v7();
        let typed: TypedUuid<Row> = raw.into();

        assert_eq!(Uuid::from(typed), raw, "round trip should keep the id");
        assert_eq!(format!("{typed:?}"), format!("{raw:?}"), "debug should match the raw id");
    }
}
