use crate::render::ChartSpec;

/// A shipped example query, plus the fixed column pair its bar chart reads.
/// The pair is tied to the template's aliases; nothing infers chart columns
/// from arbitrary results.
pub struct TemplateQuery {
    pub name: &'static str,
    pub description: &'static str,
    pub sql: &'static str,
    pub label_column: &'static str,
    pub value_column: &'static str,
}

impl TemplateQuery {
    pub fn chart_spec(&self) -> ChartSpec {
        ChartSpec {
            label_column: self.label_column,
            value_column: self.value_column,
        }
    }
}

pub const TEMPLATES: &[TemplateQuery] = &[
    TemplateQuery {
        name: "expensive-orders",
        description: "orders of 10000 and up, joined to their book",
        sql: "\
SELECT
    B.b_name AS book_name,
    B.b_publisher AS publisher,
    O.o_price AS order_price
FROM Orders O
JOIN Book B ON O.bookid = B.b_id
WHERE O.o_price >= 10000
ORDER BY order_price DESC;",
        label_column: "book_name",
        value_column: "order_price",
    },
    TemplateQuery {
        name: "customer-totals",
        description: "order totals and counts per customer",
        sql: "\
SELECT
    C.c_name AS customer_name,
    SUM(O.o_price) AS total_price,
    COUNT(*) AS order_count
FROM Orders O
JOIN Customer C ON O.custid = C.c_id
GROUP BY C.c_name
ORDER BY total_price DESC;",
        label_column: "customer_name",
        value_column: "total_price",
    },
];

/// The query pre-filled into the workbench on first render.
pub fn default_template() -> &'static TemplateQuery {
    &TEMPLATES[0]
}

/// Look up a template by its 1-based number as shown in `\help`.
pub fn template(number: usize) -> Option<&'static TemplateQuery> {
    TEMPLATES.get(number.checked_sub(1)?)
}
