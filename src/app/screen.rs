// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    /// Detail page of the car with this id.
    CarDetail(String),
    /// A car id that is not in the catalog.
    NotFound(String),
}

impl Screen {
    /// Id of the car this screen is about, if any.
    pub fn car_id(&self) -> Option<&str> {
        match self {
            Screen::Home => None,
            Screen::CarDetail(id) | Screen::NotFound(id) => Some(id),
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Screen::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_id_is_exposed_for_car_screens() {
        assert_eq!(Screen::Home.car_id(), None);
        assert_eq!(Screen::CarDetail("12".into()).car_id(), Some("12"));
        assert_eq!(Screen::NotFound("x".into()).car_id(), Some("x"));
        assert!(Screen::default().is_home());
    }
}
