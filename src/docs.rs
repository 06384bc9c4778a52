use crate::api::announcement::{AnnouncementListResponse, CreateAnnouncement};
use crate::api::attendance::{AttendanceListResponse, AttendanceQuery, CheckOutRequest};
use crate::api::deduction_type::CreateDeductionType;
use crate::api::department::{CreateDepartment, CreateJobTitle};
use crate::api::employee::{CreateEmployee, EmployeeListResponse, EmployeeQuery};
use crate::api::leave_request::{
    CreateLeave, LeaveFilter, LeaveListResponse, LeaveResponse, LeaveType,
};
use crate::api::payroll::{
    CustomDeductionInput, DuplicateCheckQuery, DuplicateCheckResponse, HolidayPayQuery,
    HolidayPayQuote, PaginatedPayrollResponse, PayrollDetailResponse, PayrollQuery, PayslipData,
    PayslipResponse, ProcessPayrollRequest, StatusUpdateRequest, ThirteenthMonthQuote,
};
use crate::api::recruitment::{
    ApplicationFilter, ApplicationListResponse, ApplicationStatusUpdate, CreateApplication,
    CreateJobPosting,
};
use crate::model::announcement::Announcement;
use crate::model::attendance::Attendance;
use crate::model::deduction_type::DeductionType;
use crate::model::department::Department;
use crate::model::employee::{Employee, MaritalStatus};
use crate::model::job_title::JobTitle;
use crate::model::job_posting::{JobApplication, JobPosting};
use crate::model::payroll::{ItemType, Payroll, PayrollItem, PayrollStatus};
use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EMS API",
        version = "1.0.0",
        description = r#"
## Employee Management System (EMS)

This API powers an **Employee Management System** for HR record-keeping,
time tracking and Philippine payroll.

### 🔹 Key Features
- **Employee Management**
  - Create, update, list, and view employee profiles with salary data
- **Attendance Management**
  - Daily check-in/check-out with overtime recording
- **Leave Management**
  - Apply for leave, approve/reject requests, and view leave history
- **Payroll Processing**
  - Deterministic monthly payroll runs: SSS, PhilHealth, Pag-IBIG and BIR
    withholding tax, overtime and holiday pay, locked immutable records
  - Payslip data feed for the document renderer
- **Recruitment**
  - Job postings and a candidate pipeline
- **Announcements**
  - Company-wide notice board

### 🔐 Security
Most endpoints are protected using **JWT Bearer authentication**.
Only authorized roles such as **Admin** or **HR** can access sensitive operations.

### 📦 Response Format
- JSON-based RESTful responses
- Pagination supported for list endpoints
- Monetary amounts are fixed 2-decimal strings

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::list_employees,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::check_in,
        crate::api::attendance::check_out,
        crate::api::attendance::list_attendance,

        crate::api::leave_request::leave_list,
        crate::api::leave_request::get_leave,
        crate::api::leave_request::create_leave,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,

        crate::api::payroll::process_payroll,
        crate::api::payroll::check_duplicate,
        crate::api::payroll::holiday_pay_quote,
        crate::api::payroll::thirteenth_month_quote,
        crate::api::payroll::list_payrolls,
        crate::api::payroll::get_payroll,
        crate::api::payroll::get_payslip,
        crate::api::payroll::update_status,
        crate::api::payroll::lock_payroll,
        crate::api::payroll::unlock_payroll,
        crate::api::payroll::delete_payroll,

        crate::api::deduction_type::create_deduction_type,
        crate::api::deduction_type::list_deduction_types,

        crate::api::department::create_department,
        crate::api::department::list_departments,
        crate::api::department::create_job_title,
        crate::api::department::list_job_titles,

        crate::api::announcement::create_announcement,
        crate::api::announcement::list_announcements,
        crate::api::announcement::get_announcement,
        crate::api::announcement::delete_announcement,

        crate::api::recruitment::create_job_posting,
        crate::api::recruitment::list_job_postings,
        crate::api::recruitment::close_job_posting,
        crate::api::recruitment::apply_to_job,
        crate::api::recruitment::list_applications,
        crate::api::recruitment::update_application_status,
    ),
    components(
        schemas(
            Employee,
            MaritalStatus,
            CreateEmployee,
            EmployeeQuery,
            EmployeeListResponse,
            Attendance,
            CheckOutRequest,
            AttendanceQuery,
            AttendanceListResponse,
            LeaveType,
            CreateLeave,
            LeaveResponse,
            LeaveListResponse,
            LeaveFilter,
            Payroll,
            PayrollItem,
            PayrollStatus,
            ItemType,
            ProcessPayrollRequest,
            CustomDeductionInput,
            DuplicateCheckQuery,
            DuplicateCheckResponse,
            PayrollQuery,
            PaginatedPayrollResponse,
            PayrollDetailResponse,
            StatusUpdateRequest,
            HolidayPayQuery,
            HolidayPayQuote,
            ThirteenthMonthQuote,
            PayslipData,
            PayslipResponse,
            DeductionType,
            CreateDeductionType,
            Department,
            CreateDepartment,
            JobTitle,
            CreateJobTitle,
            Announcement,
            CreateAnnouncement,
            AnnouncementListResponse,
            JobPosting,
            JobApplication,
            CreateJobPosting,
            CreateApplication,
            ApplicationStatusUpdate,
            ApplicationFilter,
            ApplicationListResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Leave", description = "Leave management APIs"),
        (name = "Payroll", description = "Payroll processing APIs"),
        (name = "Organization", description = "Department and job title lookups"),
        (name = "Announcement", description = "Announcement board APIs"),
        (name = "Recruitment", description = "Recruitment pipeline APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
