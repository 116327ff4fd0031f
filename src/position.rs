use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub shares: f64,
    pub average_cost: f64,
}

impl Position {
    pub fn new(shares: f64, average_cost: f64) -> Self {
        Position {
            shares,
            average_cost,
        }
    }

    pub fn total_cost(&self) -> f64 {
        self.shares * self.average_cost
    }

    // Position after buying `quantity` more shares at `price`
    pub fn with_purchase(&self, quantity: f64, price: f64) -> Self {
        let total_cost = self.total_cost() + price * quantity;
        let shares = self.shares + quantity;
        Position {
            shares,
            average_cost: total_cost / shares,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Purchase {
    pub price: f64,
}

impl Purchase {
    pub fn new(price: f64) -> Self {
        Purchase { price }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Target {
    pub average_cost: f64,
}

impl Target {
    pub fn new(average_cost: f64) -> Self {
        Target { average_cost }
    }
}

impl From<f64> for Target {
    fn from(average_cost: f64) -> Self {
        Target::new(average_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_cost_is_shares_times_average() {
        let position = Position::new(100.0, 10.0);
        assert_eq!(position.total_cost(), 1000.0);
    }

    #[test]
    fn buying_below_average_lowers_it() {
        let position = Position::new(1.0, 100.0);

        // (100 * 1 + 110 * 1) / 2 = 105
        let higher = position.with_purchase(1.0, 110.0);
        assert_eq!(higher.shares, 2.0);
        assert_eq!(higher.average_cost, 105.0);

        let lower = Position::new(100.0, 10.0).with_purchase(100.0, 8.0);
        assert_eq!(lower.shares, 200.0);
        assert_eq!(lower.average_cost, 9.0);
    }

    #[test]
    fn buying_nothing_keeps_position() {
        let position = Position::new(42.0, 12.5);
        assert_eq!(position.with_purchase(0.0, 3.0), position);
    }
}
