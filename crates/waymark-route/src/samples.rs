//! Built-in demonstration data sets.

use crate::decode::{TextPairs, Utf8BytePairs};
use crate::route::Route;
use crate::types::RouteError;

/// Ten London areas forming a single chain from Сити to Фулем.
pub const LONDON_AREAS: [[&str; 2]; 10] = [
    ["Теддингтон", "Ноттинг-Хилл"],
    ["Сити", "Вестминстер"],
    ["Ноттинг-Хилл", "Южный Кенсингтон"],
    ["Детфорд", "Фулем"],
    ["Гринвич", "Сербитон"],
    ["Челси", "Блумсбери"],
    ["Южный Кенсингтон", "Челси"],
    ["Сербитон", "Детфорд"],
    ["Вестминстер", "Теддингтон"],
    ["Блумсбери", "Гринвич"],
];

/// Ten Tokyo wards as UTF-8 byte buffers, forming a chain from Сибуя to Кото.
pub const TOKYO_WARDS: [[&[u8]; 2]; 10] = [
    ["Минато".as_bytes(), "Эдогава".as_bytes()],
    ["Тюо".as_bytes(), "Нэрима".as_bytes()],
    ["Ота".as_bytes(), "Синдзюку".as_bytes()],
    ["Эдогава".as_bytes(), "Ота".as_bytes()],
    ["Сибуя".as_bytes(), "Итабаси".as_bytes()],
    ["Синдзюку".as_bytes(), "Тосима".as_bytes()],
    ["Нэрима".as_bytes(), "Минато".as_bytes()],
    ["Бункё".as_bytes(), "Тюо".as_bytes()],
    ["Тосима".as_bytes(), "Кото".as_bytes()],
    ["Итабаси".as_bytes(), "Бункё".as_bytes()],
];

/// Selects a built-in data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// [`LONDON_AREAS`], decoded as text.
    London,
    /// [`TOKYO_WARDS`], decoded as UTF-8 bytes.
    Tokyo,
}

impl Sample {
    /// Display name for a route built from this sample.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::London => "Лондон",
            Self::Tokyo => "Токио",
        }
    }

    /// Name `route` after this sample and accept its segments.
    ///
    /// # Errors
    ///
    /// Propagates decoding errors, which the built-in data never produces.
    pub fn load(self, route: &mut Route) -> Result<(), RouteError> {
        match self {
            Self::London => route.accept_raw(&TextPairs, &LONDON_AREAS)?,
            Self::Tokyo => route.accept_raw(&Utf8BytePairs, &TOKYO_WARDS)?,
        }
        route.set_name(self.name());
        Ok(())
    }
}
