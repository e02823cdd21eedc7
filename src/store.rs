use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    db::create_orm_conn,
    entity::{
        order_items::ActiveModel as OrderItemActive,
        orders::ActiveModel as OrderActive,
        products::{Column as ProdCol, Entity as Products, Model as ProductModel},
        user_addresses::{
            ActiveModel as AddressActive, Column as AddressCol, Entity as UserAddresses,
            Model as AddressModel,
        },
        users::{ActiveModel as UserActive, Column as UserCol, Entity as Users, Model as UserModel},
    },
    error::{SeedError, SeedResult},
    models::{Address, NewOrder, NewUser, Order, PostalAddress, Product, Role, User},
};

/// The storage operations the seeders rely on.
///
/// "First" lookups are ordered by insertion time, then by id, so repeated
/// runs against the same data pick the same records.
#[allow(async_fn_in_trait)]
pub trait SeedStore {
    async fn find_user_by_email(&self, email: &str) -> SeedResult<Option<User>>;

    async fn find_first_customer(&self) -> SeedResult<Option<User>>;

    async fn find_products(&self, limit: u64) -> SeedResult<Vec<Product>>;

    /// Inserts the user and its addresses, returning the stored record.
    async fn insert_user(&self, user: NewUser) -> SeedResult<User>;

    /// Inserts the order and its line items, returning the stored record.
    async fn insert_order(&self, order: NewOrder) -> SeedResult<Order>;
}

/// [`SeedStore`] backed by a single SeaORM connection.
pub struct OrmStore {
    conn: DatabaseConnection,
}

impl OrmStore {
    pub async fn connect(database_url: &str) -> SeedResult<Self> {
        let conn = create_orm_conn(database_url).await?;
        Ok(Self { conn })
    }

    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    pub async fn close(self) -> SeedResult<()> {
        self.conn.close().await?;
        Ok(())
    }

    async fn load_user(&self, model: UserModel) -> SeedResult<User> {
        let addresses = UserAddresses::find()
            .filter(AddressCol::UserId.eq(model.id))
            .order_by_asc(AddressCol::Position)
            .all(&self.conn)
            .await?;
        user_from_entity(model, addresses)
    }
}

impl SeedStore for OrmStore {
    async fn find_user_by_email(&self, email: &str) -> SeedResult<Option<User>> {
        let user = Users::find()
            .filter(UserCol::Email.eq(email))
            .one(&self.conn)
            .await?;
        match user {
            Some(model) => Ok(Some(self.load_user(model).await?)),
            None => Ok(None),
        }
    }

    async fn find_first_customer(&self) -> SeedResult<Option<User>> {
        let user = Users::find()
            .filter(UserCol::Role.eq(Role::Customer.as_str()))
            .order_by_asc(UserCol::CreatedAt)
            .order_by_asc(UserCol::Id)
            .one(&self.conn)
            .await?;
        match user {
            Some(model) => Ok(Some(self.load_user(model).await?)),
            None => Ok(None),
        }
    }

    async fn find_products(&self, limit: u64) -> SeedResult<Vec<Product>> {
        let products = Products::find()
            .order_by_asc(ProdCol::CreatedAt)
            .order_by_asc(ProdCol::Id)
            .limit(limit)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(product_from_entity)
            .collect();
        Ok(products)
    }

    async fn insert_user(&self, user: NewUser) -> SeedResult<User> {
        let NewUser {
            name,
            email,
            password_hash,
            role,
            phone,
            addresses,
        } = user;

        let txn = self.conn.begin().await?;

        let user = UserActive {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            email: Set(email),
            password_hash: Set(password_hash),
            role: Set(role.as_str().into()),
            phone: Set(phone),
            created_at: NotSet,
        }
        .insert(&txn)
        .await?;

        let mut stored = Vec::with_capacity(addresses.len());
        for (position, address) in addresses.into_iter().enumerate() {
            let row = AddressActive {
                id: Set(Uuid::new_v4()),
                user_id: Set(user.id),
                position: Set(position_column(position)?),
                label: Set(address.label),
                street: Set(address.postal.street),
                city: Set(address.postal.city),
                state: Set(address.postal.state),
                postal_code: Set(address.postal.postal_code),
                country: Set(address.postal.country),
                is_default: Set(address.is_default),
            }
            .insert(&txn)
            .await?;
            stored.push(row);
        }

        txn.commit().await?;

        user_from_entity(user, stored)
    }

    async fn insert_order(&self, order: NewOrder) -> SeedResult<Order> {
        let txn = self.conn.begin().await?;

        let shipping = order.shipping_address();
        let payment = order.payment();
        let row = OrderActive {
            id: Set(Uuid::new_v4()),
            user_id: Set(order.user_id()),
            shipping_street: Set(shipping.street.clone()),
            shipping_city: Set(shipping.city.clone()),
            shipping_state: Set(shipping.state.clone()),
            shipping_postal_code: Set(shipping.postal_code.clone()),
            shipping_country: Set(shipping.country.clone()),
            payment_method: Set(payment.method.clone()),
            payment_status: Set(payment.status.as_str().into()),
            transaction_id: Set(payment.transaction_id.clone()),
            order_status: Set(order.order_status().as_str().into()),
            total_amount: Set(order.total_amount()),
            created_at: NotSet,
        }
        .insert(&txn)
        .await?;

        for (position, item) in order.items().iter().enumerate() {
            OrderItemActive {
                id: Set(Uuid::new_v4()),
                order_id: Set(row.id),
                product_id: Set(item.product_id),
                position: Set(position_column(position)?),
                name: Set(item.name.clone()),
                quantity: Set(item.quantity),
                price: Set(item.price),
                total: Set(item.total),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(Order::from_new(row.id, order, row.created_at.with_timezone(&Utc)))
    }
}

fn position_column(position: usize) -> SeedResult<i32> {
    i32::try_from(position).map_err(|_| SeedError::InvalidValue {
        field: "position",
        value: position.to_string(),
    })
}

fn user_from_entity(model: UserModel, addresses: Vec<AddressModel>) -> SeedResult<User> {
    Ok(User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        role: model.role.parse()?,
        phone: model.phone,
        addresses: addresses.into_iter().map(address_from_entity).collect(),
        created_at: model.created_at.with_timezone(&Utc),
    })
}

fn address_from_entity(model: AddressModel) -> Address {
    Address {
        label: model.label,
        postal: PostalAddress {
            street: model.street,
            city: model.city,
            state: model.state,
            postal_code: model.postal_code,
            country: model.country,
        },
        is_default: model.is_default,
    }
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        price: model.price,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_url_is_a_connection_error() {
        let err = OrmStore::connect("not a url")
            .await
            .err()
            .expect("connect should fail");
        assert!(matches!(err, SeedError::Connection(_)));
    }

    #[test]
    fn position_fits_the_column() {
        assert_eq!(position_column(0).unwrap(), 0);
        assert_eq!(position_column(i32::MAX as usize).unwrap(), i32::MAX);
    }

    #[test]
    fn oversized_position_is_rejected() {
        let err = position_column(i32::MAX as usize + 1).unwrap_err();
        assert!(matches!(err, SeedError::InvalidValue { field: "position", .. }));
    }
}
