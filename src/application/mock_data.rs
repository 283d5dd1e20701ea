// Fixed fallback dataset shown when the store is unreachable or empty
use crate::domain::customer::Customer;

struct MockRow {
    id: &'static str,
    company_name: &'static str,
    province: &'static str,
    city: &'static str,
    capacity_mw: f64,
    demand_type: &'static str,
    industry: &'static str,
    contact_name: &'static str,
    contact_phone: &'static str,
}

const MOCK_ROWS: &[MockRow] = &[
    MockRow {
        id: "mock-001",
        company_name: "上海临港光伏科技有限公司",
        province: "上海",
        city: "上海",
        capacity_mw: 12.5,
        demand_type: "光伏",
        industry: "制造业",
        contact_name: "张伟",
        contact_phone: "13800138000",
    },
    MockRow {
        id: "mock-002",
        company_name: "杭州钱塘储能有限公司",
        province: "浙江",
        city: "杭州",
        capacity_mw: 8.0,
        demand_type: "储能",
        industry: "能源",
        contact_name: "李娜",
        contact_phone: "13912345678",
    },
    MockRow {
        id: "mock-003",
        company_name: "苏州工业园区充电运营公司",
        province: "江苏",
        city: "苏州",
        capacity_mw: 3.2,
        demand_type: "充电",
        industry: "交通运输",
        contact_name: "王强",
        contact_phone: "13700001111",
    },
    MockRow {
        id: "mock-004",
        company_name: "上海浦东储能电站",
        province: "上海",
        city: "上海",
        capacity_mw: 20.0,
        demand_type: "储能",
        industry: "能源",
        contact_name: "刘洋",
        contact_phone: "13600002222",
    },
    MockRow {
        id: "mock-005",
        company_name: "杭州萧山屋顶光伏项目",
        province: "浙江",
        city: "杭州",
        capacity_mw: 5.6,
        demand_type: "光伏",
        industry: "纺织",
        contact_name: "陈静",
        contact_phone: "13500003333",
    },
    MockRow {
        id: "mock-006",
        company_name: "南京江北新区冷链物流",
        province: "江苏",
        city: "南京",
        capacity_mw: 2.4,
        demand_type: "其他-空调负荷",
        industry: "物流",
        contact_name: "赵敏",
        contact_phone: "13400004444",
    },
    MockRow {
        id: "mock-007",
        company_name: "苏州昆山光储一体化示范",
        province: "江苏",
        city: "苏州",
        capacity_mw: 9.8,
        demand_type: "光伏",
        industry: "电子",
        contact_name: "孙磊",
        contact_phone: "13300005555",
    },
    MockRow {
        id: "mock-008",
        company_name: "合肥新站充电场站",
        province: "安徽",
        city: "合肥",
        capacity_mw: 4.5,
        demand_type: "充电",
        industry: "交通运输",
        contact_name: "周婷",
        contact_phone: "13200006666",
    },
];

/// The mock customer set, in display order.
pub fn mock_customers() -> Vec<Customer> {
    MOCK_ROWS
        .iter()
        .map(|row| Customer {
            id: row.id.to_string(),
            company_name: row.company_name.to_string(),
            province: row.province.to_string(),
            city: row.city.to_string(),
            capacity_mw: row.capacity_mw,
            demand_type: row.demand_type.to_string(),
            industry: Some(row.industry.to_string()),
            contact_name: Some(row.contact_name.to_string()),
            contact_phone: Some(row.contact_phone.to_string()),
            created_at: None,
        })
        .collect()
}
