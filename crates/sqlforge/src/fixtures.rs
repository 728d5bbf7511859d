//! Shared schema fixtures for tests.

use crate::table::{Column, Table};

pub(crate) struct Customers {
    pub table: Table,
    pub id: Column,
    pub email: Column,
    pub full_name: Column,
    pub phone: Column,
}

pub(crate) fn customers() -> Customers {
    let table = Table::new("customers");
    Customers {
        id: table.column("id"),
        email: table.column("email"),
        full_name: table.column("full_name"),
        phone: table.column("phone"),
        table,
    }
}

pub(crate) struct Orders {
    pub table: Table,
    pub id: Column,
    pub customer_id: Column,
    pub order_date: Column,
    pub status: Column,
    pub total_amount: Column,
}

pub(crate) fn orders() -> Orders {
    let table = Table::new("orders").schema("sales");
    Orders {
        id: table.column("id"),
        customer_id: table.column("customer_id"),
        order_date: table.column("order_date"),
        status: table.column("status"),
        total_amount: table.column("total_amount"),
        table,
    }
}

pub(crate) struct CustomerAddresses {
    pub table: Table,
    pub customer_id: Column,
    pub address_id: Column,
    pub is_billing: Column,
}

pub(crate) fn customer_addresses() -> CustomerAddresses {
    let table = Table::new("customer_addresses");
    CustomerAddresses {
        customer_id: table.column("customer_id"),
        address_id: table.column("address_id"),
        is_billing: table.column("is_billing"),
        table,
    }
}

pub(crate) struct Addresses {
    pub table: Table,
    pub id: Column,
}

pub(crate) fn addresses() -> Addresses {
    let table = Table::new("addresses");
    Addresses {
        id: table.column("id"),
        table,
    }
}

pub(crate) struct Reports {
    pub table: Table,
    pub report_name: Column,
}

pub(crate) fn reports() -> Reports {
    let table = Table::new("reports").schema("public").database("analytics_db");
    Reports {
        report_name: table.column("report_name"),
        table,
    }
}
