use crate::model::OrderStatus;


// Badge icon shown next to a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Clock,
    Utensils,
    Package,
    CheckCircle,
}

// Fixed presentation of an order status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub icon: StatusIcon,
    pub color: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}


const PLACED: StatusDisplay = StatusDisplay {
    icon: StatusIcon::Clock,
    color: "#FF9500",
    label: "Order Placed",
    description: "Your order has been received",
};

const PREPARING: StatusDisplay = StatusDisplay {
    icon: StatusIcon::Utensils,
    color: "#007AFF",
    label: "Preparing",
    description: "Your order is being prepared",
};

const READY: StatusDisplay = StatusDisplay {
    icon: StatusIcon::Package,
    color: "#34C759",
    label: "Ready for Pickup",
    description: "Your order is ready!",
};

const COMPLETED: StatusDisplay = StatusDisplay {
    icon: StatusIcon::CheckCircle,
    color: "#8E8E93",
    label: "Completed",
    description: "Order picked up",
};

// One step of the progress tracker shown under an order card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStep {
    pub status: OrderStatus,
    pub icon: StatusIcon,
    pub label: &'static str,
    // At or before the order's current status
    pub reached: bool,
    pub current: bool,
}

const TRACKER: [(OrderStatus, &str); 4] = [
    (OrderStatus::Placed, "Placed"),
    (OrderStatus::Preparing, "Preparing"),
    (OrderStatus::Ready, "Ready"),
    (OrderStatus::Completed, "Completed"),
];


/// The four lifecycle steps as seen from `status`: every step up to and
/// including the current one is reached.
pub fn tracker(status: OrderStatus) -> [StatusStep; 4] {
    TRACKER.map(|(step, label)| StatusStep {
        status: step,
        icon: StatusDisplay::of(step).icon,
        label,
        reached: step <= status,
        current: step == status,
    })
}

// e.g. "◷ Placed ━━ [🍴 Preparing] ── · Ready ── · Completed"
pub fn render_tracker(status: OrderStatus) -> String {
    let mut out = String::new();
    for (index, step) in tracker(status).iter().enumerate() {
        if index > 0 {
            // the connector into a step is lit once that step is reached
            out.push_str(if step.reached { " ━━ " } else { " ── " });
        }
        let mark = if step.reached { step.icon.glyph() } else { "·" };
        if step.current {
            out.push_str(&format!("[{mark} {}]", step.label));
        } else {
            out.push_str(&format!("{mark} {}", step.label));
        }
    }
    out
}

// Compact form for the kitchen board, one dot per step
pub fn tracker_dots(status: OrderStatus) -> String {
    tracker(status)
        .iter()
        .map(|step| if step.reached { '●' } else { '○' })
        .collect()
}


impl StatusDisplay {
    pub fn of(status: OrderStatus) -> &'static StatusDisplay {
        match status {
            OrderStatus::Placed => &PLACED,
            OrderStatus::Preparing => &PREPARING,
            OrderStatus::Ready => &READY,
            OrderStatus::Completed => &COMPLETED,
        }
    }
}

impl StatusIcon {
    // Terminal stand-in for the icon glyph
    pub fn glyph(&self) -> &'static str {
        match self {
            StatusIcon::Clock => "◷",
            StatusIcon::Utensils => "🍴",
            StatusIcon::Package => "📦",
            StatusIcon::CheckCircle => "✔",
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(OrderStatus::Placed, StatusIcon::Clock, "#FF9500", "Order Placed")]
    #[case(OrderStatus::Preparing, StatusIcon::Utensils, "#007AFF", "Preparing")]
    #[case(OrderStatus::Ready, StatusIcon::Package, "#34C759", "Ready for Pickup")]
    #[case(OrderStatus::Completed, StatusIcon::CheckCircle, "#8E8E93", "Completed")]
    fn lookup(
        #[case] status: OrderStatus,
        #[case] icon: StatusIcon,
        #[case] color: &str,
        #[case] label: &str,
    ) {
        let display = StatusDisplay::of(status);
        assert_eq!(display.icon, icon);
        assert_eq!(display.color, color);
        assert_eq!(display.label, label);
    }

    #[rstest]
    #[case(OrderStatus::Placed, 1, "◷ Placed ── · Preparing ── · Ready ── · Completed", "[◷ Placed]")]
    #[case(OrderStatus::Preparing, 2, "◷ Placed ━━ 🍴 Preparing ── · Ready ── · Completed", "[🍴 Preparing]")]
    #[case(OrderStatus::Ready, 3, "◷ Placed ━━ 🍴 Preparing ━━ 📦 Ready ── · Completed", "[📦 Ready]")]
    #[case(OrderStatus::Completed, 4, "◷ Placed ━━ 🍴 Preparing ━━ 📦 Ready ━━ ✔ Completed", "[✔ Completed]")]
    fn tracker_steps(
        #[case] status: OrderStatus,
        #[case] reached: usize,
        #[case] plain: &str,
        #[case] current: &str,
    ) {
        let steps = tracker(status);
        assert_eq!(steps.iter().filter(|s| s.reached).count(), reached);
        assert_eq!(steps.iter().filter(|s| s.current).count(), 1);
        assert_eq!(steps[reached - 1].status, status);
        assert!(steps[reached - 1].current);

        let text = render_tracker(status);
        assert!(text.contains(current), "{text}");
        assert_eq!(text.replace(['[', ']'], ""), plain);
        assert_eq!(tracker_dots(status).chars().filter(|c| *c == '●').count(), reached);
    }
}
