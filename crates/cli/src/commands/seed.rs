//! Seed the database with demo users, products and sales.
//!
//! By default existing sales, products and users are deleted first (in
//! FK-safe order), then a small demo marketplace is inserted: one admin,
//! three partners, five customers, a product catalog and a batch of sales
//! attributed across the partners.
//!
//! # Environment Variables
//!
//! - `VENDORA_DATABASE_URL` - `PostgreSQL` connection string

use rust_decimal::Decimal;
use secrecy::SecretString;
use sqlx::PgPool;
use tracing::info;
use vendora_core::{Email, UserRole};

use vendora_api::db::{PgProductRepository, PgSaleRepository, PgUserRepository};
use vendora_api::models::{NewProduct, NewSale, NewUser, Product, User};
use vendora_api::repository::{ProductRepository, SaleRepository, UserRepository};

use super::CliError;

const PARTNERS: &[(&str, &str)] = &[
    ("Paula Lima", "paula.lima@vendora.dev"),
    ("Pedro Alves", "pedro.alves@vendora.dev"),
    ("Rita Souza", "rita.souza@vendora.dev"),
];

const CUSTOMERS: &[(&str, &str)] = &[
    ("Carlos Mendes", "carlos.mendes@example.com"),
    ("Fernanda Costa", "fernanda.costa@example.com"),
    ("Joao Pereira", "joao.pereira@example.com"),
    ("Luciana Rocha", "luciana.rocha@example.com"),
    ("Marcos Dias", "marcos.dias@example.com"),
];

const PRODUCTS: &[(&str, &str, bool)] = &[
    ("Notebook 15\"", "4500.00", true),
    ("Wireless Mouse", "89.90", true),
    ("Mechanical Keyboard", "349.00", true),
    ("USB-C Hub", "199.90", true),
    ("4K Monitor", "1899.00", true),
    ("Legacy Dock Station", "650.00", false),
];

/// Sales to attribute per partner.
const SALES_PER_PARTNER: usize = 3;

/// Seed demo data.
///
/// # Errors
///
/// Returns an error if the environment variable is missing or any insert
/// fails.
pub async fn run(keep_existing: bool) -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("VENDORA_DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| CliError::MissingEnvVar("VENDORA_DATABASE_URL"))?;

    let pool = vendora_api::db::create_pool(&database_url).await?;

    if keep_existing {
        info!("Keeping existing rows");
    } else {
        clean(&pool).await?;
    }

    let users = UsersFixture::insert(&pool).await?;
    let products = insert_products(&pool).await?;
    let sales = insert_sales(&pool, &users, &products).await?;

    info!(
        admins = 1,
        partners = users.partners.len(),
        customers = users.customers.len(),
        products = products.len(),
        sales,
        "Seeding complete"
    );
    Ok(())
}

/// Delete existing rows, children before parents.
async fn clean(pool: &PgPool) -> Result<(), CliError> {
    info!("Cleaning existing data...");
    sqlx::query("DELETE FROM sales").execute(pool).await?;
    sqlx::query("DELETE FROM products").execute(pool).await?;
    sqlx::query("DELETE FROM users").execute(pool).await?;
    Ok(())
}

struct UsersFixture {
    partners: Vec<User>,
    customers: Vec<User>,
}

impl UsersFixture {
    async fn insert(pool: &PgPool) -> Result<Self, CliError> {
        let repo = PgUserRepository::new(pool.clone());

        let admin = NewUser::new(
            "Vendora Admin",
            Email::parse("admin@vendora.dev")?,
            UserRole::Admin,
        )?;
        repo.create(&admin).await?;

        let mut partners = Vec::with_capacity(PARTNERS.len());
        for (name, email) in PARTNERS {
            let user = NewUser::new(*name, Email::parse(email)?, UserRole::Partner)?;
            partners.push(repo.create(&user).await?);
        }

        let mut customers = Vec::with_capacity(CUSTOMERS.len());
        for (name, email) in CUSTOMERS {
            let user = NewUser::new(*name, Email::parse(email)?, UserRole::Customer)?;
            customers.push(repo.create(&user).await?);
        }

        Ok(Self {
            partners,
            customers,
        })
    }
}

async fn insert_products(pool: &PgPool) -> Result<Vec<Product>, CliError> {
    let repo = PgProductRepository::new(pool.clone());

    let mut products = Vec::with_capacity(PRODUCTS.len());
    for (name, price, active) in PRODUCTS {
        let price: Decimal = price.parse().unwrap_or_default();
        let product = NewProduct::new(*name, price, Some(*active))?;
        products.push(repo.create(&product).await?);
    }
    Ok(products)
}

/// Attribute a few sales to every partner, cycling through customers and
/// active products; the captured value is the product's current price.
async fn insert_sales(
    pool: &PgPool,
    users: &UsersFixture,
    products: &[Product],
) -> Result<usize, CliError> {
    let repo = PgSaleRepository::new(pool.clone());
    let active: Vec<&Product> = products.iter().filter(|p| p.active).collect();
    if active.is_empty() || users.customers.is_empty() {
        return Ok(0);
    }

    let mut count = 0;
    for (i, partner) in users.partners.iter().enumerate() {
        for j in 0..SALES_PER_PARTNER {
            let Some(product) = active.get((i + j) % active.len()) else {
                break;
            };
            let Some(customer) = users.customers.get((i + j) % users.customers.len()) else {
                break;
            };

            let sale = NewSale::new(product.id, customer.id, partner.id, product.price)?;
            repo.create(&sale).await?;
            count += 1;
        }
    }
    Ok(count)
}
