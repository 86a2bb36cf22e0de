//! Shopping cart summary shown in the navbar.
//!
//! When the cart API's circuit is open the summary degrades to an inoperative basket
//! instead of an error.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCartShopping;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::service::{CartError, CartService},
    model::cart::CartDto,
};

/// What the cart summary displays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartComponentViewModel {
    /// Number of distinct items in the cart.
    pub items_in_cart: usize,
    pub total_cost: f64,
    /// The cart API is unreachable and the basket can't be used.
    pub is_basket_inoperative: bool,
}

impl CartComponentViewModel {
    /// Builds the summary from the outcome of fetching a cart.
    ///
    /// # Returns
    /// - `Ok` - Summary of the cart, or an inoperative basket for [`CartError::ServiceUnavailable`]
    /// - `Err(CartError::Request)` - Any other failure, left for the caller to report
    pub fn from_cart(result: Result<CartDto, CartError>) -> Result<Self, CartError> {
        match result {
            Ok(cart) => Ok(Self {
                items_in_cart: cart.items.len(),
                total_cost: cart.total(),
                is_basket_inoperative: false,
            }),
            Err(CartError::ServiceUnavailable) => Ok(Self {
                is_basket_inoperative: true,
                ..Self::default()
            }),
            Err(err) => Err(err),
        }
    }
}

#[component]
pub fn Cart(buyer_id: String) -> Element {
    let cart_service = use_context::<CartService>();

    let summary = use_resource(move || {
        let service = cart_service.clone();
        let buyer_id = buyer_id.clone();

        async move { CartComponentViewModel::from_cart(service.get_cart(&buyer_id, None).await) }
    });

    match &*summary.read_unchecked() {
        Some(Ok(vm)) if vm.is_basket_inoperative => rsx!(
            div { class: "flex items-center gap-2 opacity-50",
                title: "The basket is unavailable, please try again later",
                Icon { width: 24, height: 24, icon: FaCartShopping }
                p { class: "text-sm", "Basket unavailable" }
            }
        ),
        Some(Ok(vm)) => rsx!(
            div { class: "flex items-center gap-2",
                div { class: "indicator",
                    span { class: "indicator-item badge badge-primary", "{vm.items_in_cart}" }
                    Icon { width: 24, height: 24, icon: FaCartShopping }
                }
                p { class: "text-sm", {format!("${:.2}", vm.total_cost)} }
            }
        ),
        Some(Err(err)) => {
            tracing::error!("Failed to load cart: {}", err);

            rsx!(
                div { class: "flex items-center gap-2 text-error",
                    Icon { width: 24, height: 24, icon: FaCartShopping }
                    p { class: "text-sm", "Cart error" }
                }
            )
        }
        None => rsx!(div { class: "skeleton h-6 w-24" }),
    }
}
