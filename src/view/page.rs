//! Whole-page view: hero banner, menu grid and cart sidebar.

use super::cart::CartView;
use super::menu::MenuView;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub title: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub hours: &'static str,
    pub rating: &'static str,
}

pub const HERO: HeroView = HeroView {
    title: "Hey Burger",
    tagline: "Crafted with love, served with passion",
    location: "Burger Street",
    hours: "Open 9:00 AM - 10:00 PM",
    rating: "4.5",
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub hero: HeroView,
    pub menu: MenuView,
    pub cart: CartView,
}

pub fn page_view(menu: MenuView, cart: CartView) -> PageView {
    PageView {
        hero: HERO,
        menu,
        cart,
    }
}
