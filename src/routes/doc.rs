use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    audit::AuditEntry,
    checkout::CheckoutStep,
    dto::{
        cart::{AddToCartRequest, AdjustQuantityRequest, CartView, CreateCartRequest},
        catalog::{CuisineList, MenuSection, RestaurantList},
        checkout::{CheckoutView, OrderPlaced, PaymentRequest, StartCheckoutRequest},
        orders::{
            ActivityList, OrderConfirmation, OrderList, OrderView, OwnerSummary,
            UpdateOrderStatusRequest,
        },
        signup::{AddCategoryRequest, RegistrationSubmitted, SignupView},
    },
    models::{
        CardInfo, CartLine, DeliveryInfo, MenuItem, OrderAction, OrderLine, OrderStatus,
        PaymentMethod, Restaurant, RestaurantSummary,
    },
    pricing::{CartTotals, OrderTotals},
    response::{ApiResponse, Meta},
    routes::{cart, checkout, health, orders, owner, params, registrations, restaurants},
    seed::OwnerProfile,
    signup::{MenuItemDraft, MenuItemPatch, RestaurantProfile, RestaurantRegistration, SignupStep},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        restaurants::list_restaurants,
        restaurants::featured_restaurants,
        restaurants::list_cuisines,
        restaurants::get_restaurant,
        restaurants::get_menu,
        cart::create_cart,
        cart::get_cart,
        cart::add_to_cart,
        cart::adjust_quantity,
        cart::remove_cart,
        checkout::start_checkout,
        checkout::get_checkout,
        checkout::update_delivery,
        checkout::update_payment,
        checkout::next_step,
        checkout::previous_step,
        checkout::submit_order,
        orders::get_confirmation,
        registrations::start_registration,
        registrations::get_registration,
        registrations::update_basic_info,
        registrations::add_category,
        registrations::add_menu_item,
        registrations::update_menu_item,
        registrations::remove_menu_item,
        registrations::next_step,
        registrations::previous_step,
        registrations::submit_registration,
        owner::summary,
        owner::list_orders,
        owner::get_order,
        owner::update_order_status,
        owner::activity
    ),
    components(
        schemas(
            Restaurant,
            RestaurantSummary,
            MenuItem,
            CartLine,
            DeliveryInfo,
            CardInfo,
            PaymentMethod,
            OrderStatus,
            OrderAction,
            OrderLine,
            CartTotals,
            OrderTotals,
            CheckoutStep,
            SignupStep,
            RestaurantProfile,
            MenuItemDraft,
            MenuItemPatch,
            RestaurantRegistration,
            OwnerProfile,
            AuditEntry,
            RestaurantList,
            CuisineList,
            MenuSection,
            CreateCartRequest,
            AddToCartRequest,
            AdjustQuantityRequest,
            CartView,
            StartCheckoutRequest,
            PaymentRequest,
            CheckoutView,
            OrderPlaced,
            OrderConfirmation,
            OrderView,
            OrderList,
            UpdateOrderStatusRequest,
            OwnerSummary,
            ActivityList,
            AddCategoryRequest,
            SignupView,
            RegistrationSubmitted,
            params::Pagination,
            params::SortOrder,
            params::RestaurantQuery,
            params::OrderListQuery,
            Meta,
            ApiResponse<RestaurantList>,
            ApiResponse<CartView>,
            ApiResponse<CheckoutView>,
            ApiResponse<OrderPlaced>,
            ApiResponse<OrderList>,
            ApiResponse<SignupView>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Restaurants", description = "Restaurant browsing endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Checkout", description = "Checkout wizard endpoints"),
        (name = "Orders", description = "Order confirmation endpoints"),
        (name = "Registration", description = "Restaurant signup wizard endpoints"),
        (name = "Owner", description = "Owner dashboard endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
