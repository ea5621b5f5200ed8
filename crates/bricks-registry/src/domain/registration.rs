//! Registration of several concrete types in one call.

use bricks_core::{BricksResult, TypeIndex};

use super::family::ObjectFamily;
use crate::ports::{AbstractObject, DerivedObject};

/// A tuple of concrete types of the family `B`.
///
/// Types are registered left to right, so the tuple order fixes the
/// assigned indices. Registration stops at the first failure; types before
/// it stay registered.
pub trait Registrants<B: ?Sized> {
    fn register_into(family: &ObjectFamily<B>) -> BricksResult<Vec<TypeIndex>>;
}

macro_rules! impl_registrants {
    ($($d:ident),+) => {
        impl<B, $($d),+> Registrants<B> for ($($d,)+)
        where
            B: ?Sized + AbstractObject,
            $($d: DerivedObject<Base = B> + 'static,)+
        {
            fn register_into(family: &ObjectFamily<B>) -> BricksResult<Vec<TypeIndex>> {
                Ok(vec![$(family.register::<$d>()?,)+])
            }
        }
    };
}

impl_registrants!(D1);
impl_registrants!(D1, D2);
impl_registrants!(D1, D2, D3);
impl_registrants!(D1, D2, D3, D4);
impl_registrants!(D1, D2, D3, D4, D5);
impl_registrants!(D1, D2, D3, D4, D5, D6);
impl_registrants!(D1, D2, D3, D4, D5, D6, D7);
impl_registrants!(D1, D2, D3, D4, D5, D6, D7, D8);
impl_registrants!(D1, D2, D3, D4, D5, D6, D7, D8, D9);
