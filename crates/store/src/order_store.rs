use std::collections::HashMap;
use std::sync::{RwLock, RwLockWriteGuard};

use shoplite_core::{CustomerId, DomainError, DomainResult, OrderId};
use shoplite_orders::Order;

#[derive(Debug)]
struct OrderMap {
    orders: HashMap<OrderId, Order>,
    next_id: i64,
}

/// In-memory order book and the id-assignment service in one place.
///
/// Orders arrive without an id; `add` issues the next value from an
/// owned counter starting at 1 and returns the order as stored.
#[derive(Debug)]
pub struct OrderStore {
    inner: RwLock<OrderMap>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(OrderMap {
                orders: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    pub fn add(&self, mut order: Order) -> DomainResult<Order> {
        let mut inner = self.write()?;
        let id = OrderId::new(inner.next_id)?;
        order.assign_id(id)?;
        inner.next_id += 1;
        inner.orders.insert(id, order.clone());
        Ok(order)
    }

    pub fn get(&self, id: OrderId) -> Option<Order> {
        let inner = self.inner.read().ok()?;
        inner.orders.get(&id).cloned()
    }

    pub fn by_customer(&self, customer_id: CustomerId) -> Vec<Order> {
        let inner = match self.inner.read() {
            Ok(inner) => inner,
            Err(_) => return vec![],
        };
        let mut orders: Vec<Order> = inner
            .orders
            .values()
            .filter(|order| order.customer().id() == customer_id)
            .cloned()
            .collect();
        orders.sort_by_key(Order::id);
        orders
    }

    pub fn all(&self) -> Vec<Order> {
        let inner = match self.inner.read() {
            Ok(inner) => inner,
            Err(_) => return vec![],
        };
        let mut orders: Vec<Order> = inner.orders.values().cloned().collect();
        orders.sort_by_key(Order::id);
        orders
    }

    /// Replace a stored order; it must already carry the id it was
    /// issued by `add`.
    pub fn update(&self, order: Order) -> DomainResult<()> {
        let id = order
            .id()
            .ok_or_else(|| DomainError::validation("order has no id"))?;
        let mut inner = self.write()?;
        match inner.orders.get_mut(&id) {
            Some(entry) => {
                *entry = order;
                Ok(())
            }
            None => Err(DomainError::not_found(format!("order {id} not found"))),
        }
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, OrderMap>> {
        self.inner
            .write()
            .map_err(|_| DomainError::conflict("order store lock poisoned"))
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}
