use crate::model::Order;


// Count total units in an order
pub fn order_total_items(order: &Order) -> usize {
    order.lines.iter().map(|l| l.quantity as usize).sum()
}


// Rupee amount with Indian digit grouping, e.g. "₹2,840" or "₹1,25,000"
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}
