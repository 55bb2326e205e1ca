//! Unit tests for inventory and customer selection.

#[cfg(test)]
mod item {
    use crate::Item;

    #[test]
    fn take_one_decrements() {
        let mut item = Item::new("milk", 2);
        assert!(item.take_one());
        assert_eq!(item.stock(), 1);
        assert!(item.take_one());
        assert_eq!(item.stock(), 0);
    }

    #[test]
    fn take_one_on_empty_is_a_noop() {
        let mut item = Item::new("milk", 0);
        assert!(!item.take_one());
        assert_eq!(item.stock(), 0);
    }

    #[test]
    fn restock_is_unconditional() {
        let mut item = Item::new("milk", 0);
        item.restock(50);
        assert_eq!(item.stock(), 50);
        item.restock(0);
        assert_eq!(item.stock(), 50);
    }
}

#[cfg(test)]
mod inventory {
    use cq_core::{ItemId, SimRng};

    use crate::{Inventory, Item};

    #[test]
    fn stocked_names_and_counts() {
        let inv = Inventory::stocked(3, 20);
        assert_eq!(inv.len(), 3);
        assert_eq!(inv.item(ItemId(0)).unwrap().name(), "item-1");
        assert_eq!(inv.item(ItemId(2)).unwrap().name(), "item-3");
        assert_eq!(inv.total_stock(), 60);
    }

    #[test]
    fn draw_depletes_exactly_one_unit() {
        let mut inv = Inventory::stocked(4, 5);
        let mut rng = SimRng::new(11);
        let before = inv.total_stock();
        let id = inv.draw(&mut rng).expect("plenty of stock");
        assert_eq!(inv.total_stock(), before - 1);
        assert_eq!(inv.stock_of(id), 4);
    }

    #[test]
    fn draw_on_exhausted_kind_is_skipped() {
        // Single kind with zero stock: every draw lands on it and fails.
        let mut inv = Inventory::from_items(vec![Item::new("empty-shelf", 0)]);
        let mut rng = SimRng::new(1);
        for _ in 0..10 {
            assert!(inv.draw(&mut rng).is_none());
        }
        assert_eq!(inv.total_stock(), 0);
    }

    #[test]
    fn draw_on_empty_table_is_none() {
        let mut inv = Inventory::default();
        let mut rng = SimRng::new(1);
        assert!(inv.draw(&mut rng).is_none());
    }

    #[test]
    fn restock_all_adds_exactly_amount_per_kind() {
        let mut inv = Inventory::stocked(10, 20);
        inv.restock_all(50);
        assert_eq!(inv.total_stock(), 10 * 70);
        for (_, item) in inv.iter() {
            assert_eq!(item.stock(), 70);
        }
    }
}

#[cfg(test)]
mod customer {
    use cq_core::{CustomerId, SimRng, Tick};

    use crate::{Customer, Inventory, Item};

    #[test]
    fn basket_bounded_by_draw_count() {
        let mut inv = Inventory::stocked(10, 20);
        let mut rng = SimRng::new(42);
        let mut c = Customer::new(CustomerId(1), Tick(0));
        c.fill_basket(&mut inv, &mut rng, 10);

        assert!((1..=10).contains(&c.service_draws));
        assert!(c.basket_len() as u64 <= c.service_draws);
        assert_eq!(c.wait_budget, c.service_draws * 2);
    }

    #[test]
    fn depleted_stock_shortens_basket_not_budget() {
        // Empty shelves: every pick is skipped but the wait budget still
        // reflects the draw count.
        let mut inv = Inventory::from_items(vec![Item::new("empty", 0)]);
        let mut rng = SimRng::new(5);
        let mut c = Customer::new(CustomerId(1), Tick(3));
        c.fill_basket(&mut inv, &mut rng, 10);

        assert_eq!(c.basket_len(), 0);
        assert!(c.service_draws >= 1);
        assert_eq!(c.wait_budget, c.service_draws * 2);
        assert_eq!(c.due(), Tick(3) + c.wait_budget);
    }

    #[test]
    fn basket_draws_deplete_inventory() {
        let mut inv = Inventory::stocked(2, 100);
        let mut rng = SimRng::new(7);
        let before = inv.total_stock();
        let mut c = Customer::new(CustomerId(1), Tick(0));
        c.fill_basket(&mut inv, &mut rng, 10);
        assert_eq!(inv.total_stock(), before - c.basket_len() as u64);
    }

    #[test]
    fn due_is_arrival_plus_budget() {
        let mut c = Customer::new(CustomerId(9), Tick(10));
        c.service_draws = 4;
        c.wait_budget = 8;
        assert_eq!(c.due(), Tick(18));
    }

    #[test]
    fn duplicate_kinds_allowed_in_basket() {
        // One kind with deep stock: every successful draw repeats it.
        let mut inv = Inventory::from_items(vec![Item::new("only", 100)]);
        let mut rng = SimRng::new(13);
        let mut c = Customer::new(CustomerId(1), Tick(0));
        c.fill_basket(&mut inv, &mut rng, 10);
        assert!(c.basket_len() >= 1);
        assert!(c.basket.iter().all(|&id| id.index() == 0));
    }
}
