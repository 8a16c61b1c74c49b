//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here through utoipa-axum so its OpenAPI description is
//! collected into one document, served with Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so axum dispatches on the method.
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to receive its state and middleware layers.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Yaazoru", description = "Yaazoru business management API"), tags(
        (name = controller::customer::CUSTOMER_TAG, description = "Customers and their device assignments"),
        (name = controller::device::DEVICE_TAG, description = "Device inventory"),
        (name = controller::sim_card::SIM_CARD_TAG, description = "SIM card inventory"),
        (name = controller::user::USER_TAG, description = "Staff users"),
        (name = controller::branch::BRANCH_TAG, description = "Branches"),
        (name = controller::billing::BILLING_TAG, description = "Monthly payments, installments and items"),
        (name = controller::comment::COMMENT_TAG, description = "Comments on any record"),
        (name = controller::import::IMPORT_TAG, description = "Excel imports"),
        (name = controller::integration::INTEGRATION_TAG, description = "Third-party services"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::customer::list_customers,
            controller::customer::create_customer
        ))
        .routes(routes!(
            controller::customer::get_customer,
            controller::customer::update_customer,
            controller::customer::delete_customer
        ))
        .routes(routes!(
            controller::customer::list_customer_devices,
            controller::customer::assign_device
        ))
        .routes(routes!(controller::customer::unassign_device))
        .routes(routes!(
            controller::device::list_devices,
            controller::device::create_device
        ))
        .routes(routes!(
            controller::device::get_device,
            controller::device::update_device,
            controller::device::delete_device
        ))
        .routes(routes!(controller::device::get_samsung_status))
        .routes(routes!(
            controller::sim_card::list_sim_cards,
            controller::sim_card::create_sim_card
        ))
        .routes(routes!(
            controller::sim_card::get_sim_card,
            controller::sim_card::update_sim_card,
            controller::sim_card::delete_sim_card
        ))
        .routes(routes!(
            controller::user::list_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::branch::list_branches,
            controller::branch::create_branch
        ))
        .routes(routes!(
            controller::branch::get_branch,
            controller::branch::update_branch,
            controller::branch::delete_branch
        ))
        .routes(routes!(
            controller::billing::list_monthly_payments,
            controller::billing::create_monthly_payment
        ))
        .routes(routes!(
            controller::billing::get_monthly_payment,
            controller::billing::update_monthly_payment,
            controller::billing::delete_monthly_payment
        ))
        .routes(routes!(controller::billing::list_payments))
        .routes(routes!(controller::billing::update_payment))
        .routes(routes!(
            controller::billing::list_items,
            controller::billing::create_item
        ))
        .routes(routes!(
            controller::billing::update_item,
            controller::billing::delete_item
        ))
        .routes(routes!(
            controller::comment::list_comments,
            controller::comment::create_comment
        ))
        .routes(routes!(
            controller::comment::update_comment,
            controller::comment::delete_comment
        ))
        .routes(routes!(controller::import::import_customers))
        .routes(routes!(controller::import::import_devices))
        .routes(routes!(controller::integration::tokenize_card))
        .routes(routes!(controller::integration::list_customer_calls))
        .routes(routes!(controller::integration::place_call))
        .routes(routes!(controller::integration::recognize_speech))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
