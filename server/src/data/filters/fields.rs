//! Known employee fields
//!
//! The only names accepted for filtering and sorting. Each API name maps to a
//! fixed column and a value kind, so user input never reaches the SQL text.

/// How values for a field are parsed and compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    /// Stored as unix seconds
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    EmployeeId,
    FirstName,
    LastName,
    Email,
    Department,
    Position,
    Salary,
    HireDate,
    Status,
    Location,
    Age,
    Phone,
    Manager,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 13] = [
        Self::EmployeeId,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Department,
        Self::Position,
        Self::Salary,
        Self::HireDate,
        Self::Status,
        Self::Location,
        Self::Age,
        Self::Phone,
        Self::Manager,
    ];

    /// Resolve an API field name (camelCase, as the client sends it)
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.api_name() == name)
    }

    pub const fn api_name(&self) -> &'static str {
        match self {
            Self::EmployeeId => "employeeId",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Department => "department",
            Self::Position => "position",
            Self::Salary => "salary",
            Self::HireDate => "hireDate",
            Self::Status => "status",
            Self::Location => "location",
            Self::Age => "age",
            Self::Phone => "phone",
            Self::Manager => "manager",
        }
    }

    pub const fn column(&self) -> &'static str {
        match self {
            Self::EmployeeId => "employee_id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Department => "department",
            Self::Position => "position",
            Self::Salary => "salary",
            Self::HireDate => "hire_date",
            Self::Status => "status",
            Self::Location => "location",
            Self::Age => "age",
            Self::Phone => "phone",
            Self::Manager => "manager",
        }
    }

    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Salary | Self::Age => FieldKind::Number,
            Self::HireDate => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }
}
