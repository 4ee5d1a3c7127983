//! Employee repository for SQLite operations
//!
//! Listing takes a compiled filter predicate; every value in it is bound,
//! the SQL text only ever contains known column names.

use sqlx::query::QueryAs;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Sqlite, SqliteConnection, SqlitePool};

use crate::data::filters::SqlValue;
use crate::data::sqlite::SqliteError;
use crate::data::types::{EmployeeListParams, EmployeeRow, EmployeeSort};

const EMPLOYEE_COLUMNS: &str = "id, employee_id, first_name, last_name, email, department, \
     position, salary, hire_date, status, location, age, phone, manager, created_at, updated_at";

fn bind_predicate<'q, O>(
    mut query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    params: &'q [SqlValue],
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    for value in params {
        query = match value {
            SqlValue::Text(s) => query.bind(s.as_str()),
            SqlValue::Real(n) => query.bind(*n),
            SqlValue::Integer(n) => query.bind(*n),
        };
    }
    query
}

/// List one page of employees matching the predicate.
/// Returns the page and the total number of matching rows.
pub async fn list_employees(
    pool: &SqlitePool,
    params: &EmployeeListParams,
) -> Result<(Vec<EmployeeRow>, u64), SqliteError> {
    let sql = format!(
        "SELECT {} FROM employees WHERE {} ORDER BY {} LIMIT ? OFFSET ?",
        EMPLOYEE_COLUMNS,
        params.predicate.sql,
        EmployeeSort::order_by_sql(params.sort.as_ref()),
    );
    let rows = bind_predicate(
        sqlx::query_as::<_, EmployeeRow>(&sql),
        &params.predicate.params,
    )
    .bind(params.limit)
    .bind(params.offset() as i64)
    .fetch_all(pool)
    .await?;

    let count_sql = format!(
        "SELECT COUNT(*) FROM employees WHERE {}",
        params.predicate.sql
    );
    let total: (i64,) = bind_predicate(sqlx::query_as(&count_sql), &params.predicate.params)
        .fetch_one(pool)
        .await?;

    Ok((rows, total.0 as u64))
}

/// Total number of employees
pub async fn count_employees(pool: &SqlitePool) -> Result<u64, SqliteError> {
    let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await?;
    Ok(total.0 as u64)
}

/// Insert employees on an open connection (usually inside a transaction)
pub async fn insert_employees(
    conn: &mut SqliteConnection,
    employees: &[EmployeeRow],
) -> Result<u64, SqliteError> {
    let sql = format!(
        "INSERT INTO employees ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        EMPLOYEE_COLUMNS
    );
    let mut inserted = 0;
    for e in employees {
        let result = sqlx::query(&sql)
            .bind(&e.id)
            .bind(&e.employee_id)
            .bind(&e.first_name)
            .bind(&e.last_name)
            .bind(&e.email)
            .bind(&e.department)
            .bind(&e.position)
            .bind(e.salary)
            .bind(e.hire_date)
            .bind(&e.status)
            .bind(&e.location)
            .bind(e.age)
            .bind(&e.phone)
            .bind(&e.manager)
            .bind(e.created_at)
            .bind(e.updated_at)
            .execute(&mut *conn)
            .await?;
        inserted += result.rows_affected();
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::{EmployeeField, Filter, FilterLogic, Predicate, compile};
    use crate::data::sqlite::test_pool;
    use crate::data::types::OrderDirection;

    fn employee(n: u32, department: &str, salary: f64) -> EmployeeRow {
        EmployeeRow {
            id: format!("id{:04}", n),
            employee_id: format!("EMP{:04}", n),
            first_name: format!("First{}", n),
            last_name: format!("Last{}", n),
            email: format!("user{}@example.com", n),
            department: department.to_string(),
            position: "Engineer".to_string(),
            salary,
            hire_date: 1_600_000_000 + i64::from(n) * 86_400,
            status: "Active".to_string(),
            location: "Remote".to_string(),
            age: 30,
            phone: "555-0100".to_string(),
            manager: None,
            created_at: 1_700_000_000,
            updated_at: 1_700_000_000,
        }
    }

    async fn insert(pool: &SqlitePool, employees: &[EmployeeRow]) {
        let mut conn = pool.acquire().await.unwrap();
        insert_employees(&mut conn, employees).await.unwrap();
    }

    fn params(predicate: Predicate, page: u32, limit: u32) -> EmployeeListParams {
        EmployeeListParams {
            predicate,
            sort: Some(EmployeeSort {
                field: EmployeeField::HireDate,
                direction: OrderDirection::Desc,
            }),
            page,
            limit,
        }
    }

    #[tokio::test]
    async fn test_pagination_over_filtered_rows() {
        let pool = test_pool().await;
        let mut rows: Vec<EmployeeRow> = (1..=25).map(|n| employee(n, "Sales", 50_000.0)).collect();
        rows.extend((26..=30).map(|n| employee(n, "HR", 50_000.0)));
        insert(&pool, &rows).await;

        let predicate = compile(
            &[Filter::new("department", "equals", "Sales")],
            FilterLogic::And,
        )
        .unwrap();

        let (page2, total) = list_employees(&pool, &params(predicate.clone(), 2, 10))
            .await
            .unwrap();
        assert_eq!(page2.len(), 10);
        assert_eq!(total, 25);

        let (page3, total) = list_employees(&pool, &params(predicate, 3, 10))
            .await
            .unwrap();
        assert_eq!(page3.len(), 5);
        assert_eq!(total, 25);
        assert!(page3.iter().all(|e| e.department == "Sales"));
    }

    #[tokio::test]
    async fn test_sort_by_hire_date() {
        let pool = test_pool().await;
        insert(&pool, &[employee(1, "HR", 1.0), employee(2, "HR", 2.0), employee(3, "HR", 3.0)]).await;

        let (rows, _) = list_employees(&pool, &params(Predicate::match_all(), 1, 10))
            .await
            .unwrap();
        let ids: Vec<_> = rows.iter().map(|e| e.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["EMP0003", "EMP0002", "EMP0001"]);

        let mut asc = params(Predicate::match_all(), 1, 10);
        asc.sort = Some(EmployeeSort {
            field: EmployeeField::Salary,
            direction: OrderDirection::Asc,
        });
        let (rows, _) = list_employees(&pool, &asc).await.unwrap();
        assert_eq!(rows[0].employee_id, "EMP0001");
    }

    #[tokio::test]
    async fn test_natural_order_without_sort() {
        let pool = test_pool().await;
        insert(&pool, &[employee(2, "HR", 1.0), employee(1, "HR", 2.0)]).await;

        let mut p = params(Predicate::match_all(), 1, 10);
        p.sort = None;
        let (rows, _) = list_employees(&pool, &p).await.unwrap();
        assert_eq!(rows[0].id, "id0001");
        assert_eq!(rows[1].id, "id0002");
    }

    #[tokio::test]
    async fn test_between_is_inclusive() {
        let pool = test_pool().await;
        insert(
            &pool,
            &[
                employee(1, "Sales", 39_999.0),
                employee(2, "Sales", 40_000.0),
                employee(3, "Sales", 80_000.0),
                employee(4, "Sales", 80_001.0),
            ],
        )
        .await;

        let predicate = compile(
            &[Filter::new("salary", "between", "40000,80000")],
            FilterLogic::And,
        )
        .unwrap();
        let (rows, total) = list_employees(&pool, &params(predicate, 1, 10))
            .await
            .unwrap();
        assert_eq!(total, 2);
        let mut salaries: Vec<f64> = rows.iter().map(|e| e.salary).collect();
        salaries.sort_by(f64::total_cmp);
        assert_eq!(salaries, vec![40_000.0, 80_000.0]);
    }

    #[tokio::test]
    async fn test_in_list_and_or_logic() {
        let pool = test_pool().await;
        insert(
            &pool,
            &[
                employee(1, "Sales", 10.0),
                employee(2, "HR", 20.0),
                employee(3, "Engineering", 30.0),
            ],
        )
        .await;

        let in_list = compile(
            &[Filter::new("department", "inList", "Sales, HR")],
            FilterLogic::And,
        )
        .unwrap();
        let (_, total) = list_employees(&pool, &params(in_list, 1, 10)).await.unwrap();
        assert_eq!(total, 2);

        let filters = vec![
            Filter::new("department", "equals", "Sales"),
            Filter::new("salary", "greaterThan", "25"),
        ];
        let or = compile(&filters, FilterLogic::Or).unwrap();
        let (_, total) = list_employees(&pool, &params(or, 1, 10)).await.unwrap();
        assert_eq!(total, 2);

        let and = compile(&filters, FilterLogic::And).unwrap();
        let (_, total) = list_employees(&pool, &params(and, 1, 10)).await.unwrap();
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_contains_is_case_insensitive() {
        let pool = test_pool().await;
        insert(&pool, &[employee(1, "Engineering", 1.0), employee(2, "Sales", 1.0)]).await;

        let predicate = compile(
            &[Filter::new("department", "contains", "ENGIN")],
            FilterLogic::And,
        )
        .unwrap();
        let (rows, _) = list_employees(&pool, &params(predicate, 1, 10))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].department, "Engineering");
    }

    #[tokio::test]
    async fn test_like_folds_ascii_case_only() {
        let pool = test_pool().await;
        let mut emile = employee(1, "Sales", 1.0);
        emile.first_name = "Émile".to_string();
        insert(&pool, &[emile]).await;

        let matches = |value: &'static str| {
            let predicate = compile(
                &[Filter::new("firstName", "startsWith", value)],
                FilterLogic::And,
            )
            .unwrap();
            let pool = pool.clone();
            async move {
                list_employees(&pool, &params(predicate, 1, 10))
                    .await
                    .unwrap()
                    .1
            }
        };

        assert_eq!(matches("ÉMILE").await, 1);
        assert_eq!(matches("Émi").await, 1);
        assert_eq!(matches("émile").await, 0);
    }

    #[tokio::test]
    async fn test_count_employees() {
        let pool = test_pool().await;
        assert_eq!(count_employees(&pool).await.unwrap(), 0);
        insert(&pool, &[employee(1, "HR", 1.0), employee(2, "HR", 1.0)]).await;
        assert_eq!(count_employees(&pool).await.unwrap(), 2);
    }
}
