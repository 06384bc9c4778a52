use crate::{
    api::{
        announcement, attendance, deduction_type, department, employee, leave_request, payroll,
        recruitment,
    },
    auth::{handlers, middleware::auth_middleware},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let login_limiter = Arc::new(build_limiter(config.rate_login_per_min));
    let register_limiter = Arc::new(build_limiter(config.rate_register_per_min));
    let refresh_limiter = Arc::new(build_limiter(config.rate_refresh_per_min));
    let protected_limiter = Arc::new(build_limiter(config.rate_protected_per_min));

    // Public routes
    cfg.service(
        web::scope("/auth")
            .service(
                web::resource("/login")
                    .wrap(login_limiter.clone())
                    .route(web::post().to(handlers::login)),
            )
            .service(
                web::resource("/register")
                    .wrap(register_limiter.clone())
                    .route(web::post().to(handlers::register)),
            )
            .service(
                web::resource("/refresh")
                    .wrap(refresh_limiter.clone())
                    .route(web::post().to(handlers::refresh_token)),
            )
            .service(
                web::resource("/logout")
                    .wrap(login_limiter.clone())
                    .route(web::post().to(handlers::logout)),
            ),
    );

    // Protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware)) // authentication
            .wrap(protected_limiter) // rate limiting
            .service(handlers::protected)
            .service(
                web::scope("/employees")
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(employee::update_employee))
                            .route(web::get().to(employee::get_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/leave")
                    .service(
                        web::resource("")
                            .route(web::get().to(leave_request::leave_list))
                            .route(web::post().to(leave_request::create_leave)),
                    )
                    .service(web::resource("/{id}").route(web::get().to(leave_request::get_leave)))
                    .service(
                        web::resource("/{id}/approve")
                            .route(web::put().to(leave_request::approve_leave)),
                    )
                    .service(
                        web::resource("/{id}/reject")
                            .route(web::put().to(leave_request::reject_leave)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    .service(web::resource("").route(web::get().to(attendance::list_attendance)))
                    .service(
                        web::resource("/check-in").route(web::post().to(attendance::check_in)),
                    )
                    .service(
                        web::resource("/check-out").route(web::put().to(attendance::check_out)),
                    ),
            )
            .service(
                web::scope("/payroll")
                    .service(web::resource("").route(web::get().to(payroll::list_payrolls)))
                    .service(
                        web::resource("/process").route(web::post().to(payroll::process_payroll)),
                    )
                    .service(
                        web::resource("/check-duplicate")
                            .route(web::get().to(payroll::check_duplicate)),
                    )
                    .service(
                        web::resource("/holiday-pay/{id}")
                            .route(web::get().to(payroll::holiday_pay_quote)),
                    )
                    .service(
                        web::resource("/thirteenth-month/{id}")
                            .route(web::get().to(payroll::thirteenth_month_quote)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(payroll::get_payroll))
                            .route(web::delete().to(payroll::delete_payroll)),
                    )
                    .service(
                        web::resource("/{id}/payslip").route(web::get().to(payroll::get_payslip)),
                    )
                    .service(
                        web::resource("/{id}/status").route(web::put().to(payroll::update_status)),
                    )
                    .service(
                        web::resource("/{id}/lock").route(web::put().to(payroll::lock_payroll)),
                    )
                    .service(
                        web::resource("/{id}/unlock")
                            .route(web::put().to(payroll::unlock_payroll)),
                    ),
            )
            .service(
                web::scope("/deduction-types").service(
                    web::resource("")
                        .route(web::post().to(deduction_type::create_deduction_type))
                        .route(web::get().to(deduction_type::list_deduction_types)),
                ),
            )
            .service(
                web::scope("/departments").service(
                    web::resource("")
                        .route(web::post().to(department::create_department))
                        .route(web::get().to(department::list_departments)),
                ),
            )
            .service(
                web::scope("/job-titles").service(
                    web::resource("")
                        .route(web::post().to(department::create_job_title))
                        .route(web::get().to(department::list_job_titles)),
                ),
            )
            .service(
                web::scope("/announcements")
                    .service(
                        web::resource("")
                            .route(web::post().to(announcement::create_announcement))
                            .route(web::get().to(announcement::list_announcements)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(announcement::get_announcement))
                            .route(web::delete().to(announcement::delete_announcement)),
                    ),
            )
            .service(
                web::scope("/recruitment")
                    .service(
                        web::resource("/jobs")
                            .route(web::post().to(recruitment::create_job_posting))
                            .route(web::get().to(recruitment::list_job_postings)),
                    )
                    .service(
                        web::resource("/jobs/{id}/close")
                            .route(web::put().to(recruitment::close_job_posting)),
                    )
                    .service(
                        web::resource("/jobs/{id}/apply")
                            .route(web::post().to(recruitment::apply_to_job)),
                    )
                    .service(
                        web::resource("/applications")
                            .route(web::get().to(recruitment::list_applications)),
                    )
                    .service(
                        web::resource("/applications/{id}/status")
                            .route(web::put().to(recruitment::update_application_status)),
                    ),
            ),
    );
}

// LOGIN
//  ├─ access_token (15 min)
//  └─ refresh_token (7 days)

// API REQUEST
//  └─ Authorization: Bearer access_token

// ACCESS EXPIRED
//  └─ POST /refresh with refresh_token
//       └─ returns new access_token
