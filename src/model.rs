use std::{fmt, time::Duration};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};


// Menu sections shown as category chips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    MainCourse,
    Starters,
    Beverages,
    FastFood,
    SouthIndian,
}

// Logical kitchen stations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Station {
    Grill,
    Tawa,
    Drinks,
}

// Immutable catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub image: String,
    pub category: Category,
    pub available: bool,
    pub preparation_time_minutes: u32,
}

// A pending selection in the cart, with the price frozen at add time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub item: MenuItem,
    pub quantity: u32,
}

// Lifecycle of a placed order, in progression order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Placed,
    Preparing,
    Ready,
    Completed,
}

// Represents a line in an order, locked at placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item_id: String,
    pub name: String,
    pub category: Category,
    pub unit_price: u32,
    pub quantity: u32,
    pub preparation_time_minutes: u32,
}

// Represents a customer order consisting of multiple lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    pub lines: Vec<OrderLine>,
    pub total: u64,
    pub status: OrderStatus,
    pub order_time: NaiveTime,
    pub estimated_time: Option<NaiveTime>,
    pub pickup_time: Option<NaiveTime>,
}

// Finished unit produced by a station
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedItem {
    pub order_id: String,
    pub item_id: String,
    pub station: Station,
}


impl Category {
    pub const ALL: [Category; 5] = [
        Category::MainCourse,
        Category::Starters,
        Category::Beverages,
        Category::FastFood,
        Category::SouthIndian,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::MainCourse => "Main Course",
            Category::Starters => "Starters",
            Category::Beverages => "Beverages",
            Category::FastFood => "Fast Food",
            Category::SouthIndian => "South Indian",
        }
    }

    // Case-insensitive match on the display label
    pub fn parse(label: &str) -> Option<Category> {
        let label = label.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }

    // Determine which station handles this category
    pub fn station(&self) -> Station {
        match self {
            Category::MainCourse | Category::FastFood | Category::Starters => Station::Grill,
            Category::SouthIndian => Station::Tawa,
            Category::Beverages => Station::Drinks,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}


impl Station {
    pub fn name(&self) -> &'static str {
        match self {
            Station::Grill => "grill",
            Station::Tawa => "tawa",
            Station::Drinks => "drinks",
        }
    }

    // Column index on the kitchen board
    pub fn bucket(&self) -> usize {
        match self {
            Station::Grill => 0,
            Station::Tawa => 1,
            Station::Drinks => 2,
        }
    }
}


impl CartEntry {
    pub fn id(&self) -> &str {
        &self.item.id
    }

    pub fn line_total(&self) -> u64 {
        u64::from(self.item.price) * u64::from(self.quantity)
    }
}


impl OrderStatus {
    // Next state in the lifecycle; completed is terminal
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Placed => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, OrderStatus::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


impl OrderLine {
    pub fn from_entry(entry: &CartEntry) -> Self {
        OrderLine {
            item_id: entry.item.id.clone(),
            name: entry.item.name.clone(),
            category: entry.item.category,
            unit_price: entry.item.price,
            quantity: entry.quantity,
            preparation_time_minutes: entry.item.preparation_time_minutes,
        }
    }

    pub fn line_total(&self) -> u64 {
        u64::from(self.unit_price) * u64::from(self.quantity)
    }

    // Total preparation time for one unit of this line
    pub fn prep_time(&self, minute: Duration) -> Duration {
        minute * self.preparation_time_minutes
    }

    pub fn station(&self) -> Station {
        self.category.station()
    }

    // Display string used on order cards, e.g. "Cold Coffee x2"
    pub fn label(&self) -> String {
        format!("{} x{}", self.name, self.quantity)
    }
}


impl Order {
    pub fn items(&self) -> Vec<String> {
        self.lines.iter().map(OrderLine::label).collect()
    }
}
