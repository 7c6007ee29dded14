// Task Management System API Server
// 작업 관리 시스템 API 서버
pub mod domains;
pub mod shared;
pub mod routes;
