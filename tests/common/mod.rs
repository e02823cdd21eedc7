#![allow(dead_code)]

use std::sync::Mutex;

use chrono::Utc;
use proshop_seed::{
    credentials::CredentialHasher,
    error::{SeedError, SeedResult},
    models::{NewOrder, NewUser, Order, Product, Role, User},
    store::SeedStore,
};
use uuid::Uuid;

/// Insertion-ordered in-memory storage.
#[derive(Default)]
pub struct MemoryStore {
    pub users: Mutex<Vec<User>>,
    pub products: Mutex<Vec<Product>>,
    pub orders: Mutex<Vec<Order>>,
    /// Number of user inserts to accept before rejecting the rest.
    pub user_insert_budget: Mutex<Option<usize>>,
}

impl MemoryStore {
    pub fn add_product(&self, name: &str, price: i64) -> Product {
        let product = Product {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            created_at: Utc::now(),
        };
        self.products.lock().unwrap().push(product.clone());
        product
    }

    pub fn add_user(&self, name: &str, email: &str, role: Role) -> User {
        let user = User {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password_hash: "existing-hash".into(),
            role,
            phone: String::new(),
            addresses: Vec::new(),
            created_at: Utc::now(),
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }
}

impl SeedStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> SeedResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_first_customer(&self) -> SeedResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.role == Role::Customer)
            .cloned())
    }

    async fn find_products(&self, limit: u64) -> SeedResult<Vec<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn insert_user(&self, user: NewUser) -> SeedResult<User> {
        {
            let mut budget = self.user_insert_budget.lock().unwrap();
            if let Some(remaining) = budget.as_mut() {
                if *remaining == 0 {
                    return Err(SeedError::Db(sea_orm::DbErr::Custom(
                        "insert rejected".into(),
                    )));
                }
                *remaining -= 1;
            }
        }

        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(SeedError::Db(sea_orm::DbErr::Custom(format!(
                "duplicate email {}",
                user.email
            ))));
        }
        let stored = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            phone: user.phone,
            addresses: user.addresses,
            created_at: Utc::now(),
        };
        users.push(stored.clone());
        Ok(stored)
    }

    async fn insert_order(&self, order: NewOrder) -> SeedResult<Order> {
        let stored = Order::from_new(Uuid::new_v4(), order, Utc::now());
        self.orders.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}

/// Cheap stand-in for Argon2 that keeps the plaintext recoverable in assertions.
pub struct PrefixHasher;

impl CredentialHasher for PrefixHasher {
    fn hash(&self, password: &str) -> SeedResult<String> {
        Ok(format!("hashed:{password}"))
    }
}
