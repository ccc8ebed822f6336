//! End-to-end sale / commission / report flow.
//!
//! These tests require a running API with a migrated database:
//! `VENDORA_API_BASE_URL=http://localhost:3000 cargo test -p vendora-integration-tests`

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use vendora_integration_tests::{require_server, unique_email};

async fn create_user(client: &Client, base: &str, name: &str, role: &str) -> Value {
    let resp = client
        .post(format!("{base}/users"))
        .json(&json!({"name": name, "email": unique_email(&role.to_lowercase()), "role": role}))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("invalid json")
}

async fn create_product(client: &Client, base: &str, name: &str, price: &str, active: bool) -> Value {
    let resp = client
        .post(format!("{base}/products"))
        .json(&json!({"name": name, "price": price, "active": active}))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("invalid json")
}

#[tokio::test]
async fn sale_commission_and_report_round() {
    let Some(base) = require_server("sale_commission_and_report_round") else {
        return;
    };
    let client = Client::new();

    let product = create_product(&client, &base, "Flow Course", "100.00", true).await;
    let customer = create_user(&client, &base, "Flow Customer", "CUSTOMER").await;
    let partner = create_user(&client, &base, "Flow Partner", "PARTNER").await;

    // Record the sale with the product's price as the captured value.
    let sale_resp = client
        .post(format!("{base}/sales"))
        .json(&json!({
            "productId": product["id"],
            "customerId": customer["id"],
            "partnerId": partner["id"],
            "value": "100.00",
        }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(sale_resp.status(), StatusCode::CREATED);
    let sale: Value = sale_resp.json().await.expect("invalid json");
    assert_eq!(sale["value"], json!("100.00"));

    // Commissions: one sale, 10% of 100.00.
    let commissions: Value = client
        .get(format!("{base}/partners/{}/commissions", partner["id"]))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("invalid json");
    assert_eq!(commissions["totalSales"], json!(1));
    assert_eq!(
        commissions["totalValue"].as_str().map(str::parse::<f64>),
        Some(Ok(100.0))
    );
    assert_eq!(
        commissions["totalCommission"].as_str().map(str::parse::<f64>),
        Some(Ok(10.0))
    );

    // A report filtered to this partner sees exactly the one sale.
    let report: Value = client
        .get(format!("{base}/reports/sales?partnerId={}", partner["id"]))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("invalid json");
    assert_eq!(report["totalSales"], json!(1));
    let report_sale = &report["sales"][0];
    assert_eq!(report_sale["partner"]["id"], partner["id"]);
    assert_eq!(report_sale["product"]["name"], json!("Flow Course"));

    // A report window that opens after the sale is empty.
    let empty: Value = client
        .get(format!(
            "{base}/reports/sales?partnerId={}&startDate=2999-01-01",
            partner["id"]
        ))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("invalid json");
    assert_eq!(empty["totalSales"], json!(0));
    assert!(empty["sales"].as_array().expect("sales array").is_empty());
}

#[tokio::test]
async fn inactive_product_rejects_new_sales() {
    let Some(base) = require_server("inactive_product_rejects_new_sales") else {
        return;
    };
    let client = Client::new();

    let product = create_product(&client, &base, "Retired SKU", "50.00", false).await;
    let customer = create_user(&client, &base, "Blocked Customer", "CUSTOMER").await;
    let partner = create_user(&client, &base, "Blocked Partner", "PARTNER").await;

    let resp = client
        .post(format!("{base}/sales"))
        .json(&json!({
            "productId": product["id"],
            "customerId": customer["id"],
            "partnerId": partner["id"],
            "value": "50.00",
        }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("invalid json");
    assert_eq!(body["error"], json!("invalid_state"));
}

#[tokio::test]
async fn commissions_reject_non_partner_ids() {
    let Some(base) = require_server("commissions_reject_non_partner_ids") else {
        return;
    };
    let client = Client::new();

    let customer = create_user(&client, &base, "Plain Customer", "CUSTOMER").await;
    let resp = client
        .get(format!("{base}/partners/{}/commissions", customer["id"]))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let missing = client
        .get(format!("{base}/partners/999999/commissions"))
        .send()
        .await
        .expect("request failed");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_and_docs_are_served() {
    let Some(base) = require_server("health_and_docs_are_served") else {
        return;
    };
    let client = Client::new();

    let health = client
        .get(format!("{base}/health"))
        .send()
        .await
        .expect("request failed");
    assert_eq!(health.status(), StatusCode::OK);

    let docs: Value = client
        .get(format!("{base}/api/docs/openapi.json"))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("invalid json");
    assert!(docs["paths"]["/reports/sales"].is_object());
}
