/// Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// Every backend operation the gateway performs.
/// Each carries the fixed message used when a rejection has no readable `detail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Login,
    Register,

    ListCertificates,
    GetCertificate,
    CreateCertificate,
    UpdateCertificate,
    DeleteCertificate,

    ListDocuments,
    GetDocument,
    CreateDocument,
    UpdateDocument,
    DeleteDocument,
    ArchiveDocument,

    ListSeaTimeLogs,
    GetSeaTimeLog,
    CreateSeaTimeLog,
    UpdateSeaTimeLog,
    DeleteSeaTimeLog,

    GetProfile,
    UpdateProfile,

    ListCategories,
    CreateCategory,
    UpdateCategory,
    DeleteCategory,

    ListResumes,
    GetResume,
    CreateResume,
    UpdateResume,
    DeleteResume,

    DashboardSummary,
}

impl Operation {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Operation::Login => "Login failed",
            Operation::Register => "Registration failed",

            Operation::ListCertificates => "Failed to fetch certificates",
            Operation::GetCertificate => "Failed to fetch certificate",
            Operation::CreateCertificate => "Failed to create certificate",
            Operation::UpdateCertificate => "Failed to update certificate",
            Operation::DeleteCertificate => "Failed to delete certificate",

            Operation::ListDocuments => "Failed to fetch documents",
            Operation::GetDocument => "Failed to fetch document",
            Operation::CreateDocument => "Failed to create document",
            Operation::UpdateDocument => "Failed to update document",
            Operation::DeleteDocument => "Failed to delete document",
            Operation::ArchiveDocument => "Failed to archive document",

            Operation::ListSeaTimeLogs => "Failed to fetch sea time logs",
            Operation::GetSeaTimeLog => "Failed to fetch sea time log",
            Operation::CreateSeaTimeLog => "Failed to create sea time log",
            Operation::UpdateSeaTimeLog => "Failed to update sea time log",
            Operation::DeleteSeaTimeLog => "Failed to delete sea time log",

            Operation::GetProfile => "Failed to fetch profile",
            Operation::UpdateProfile => "Failed to update profile",

            Operation::ListCategories => "Failed to fetch categories",
            Operation::CreateCategory => "Failed to create category",
            Operation::UpdateCategory => "Failed to update category",
            Operation::DeleteCategory => "Failed to delete category",

            Operation::ListResumes => "Failed to fetch resume drafts",
            Operation::GetResume => "Failed to fetch resume draft",
            Operation::CreateResume => "Failed to create resume draft",
            Operation::UpdateResume => "Failed to update resume draft",
            Operation::DeleteResume => "Failed to delete resume draft",

            Operation::DashboardSummary => "Failed to fetch dashboard summary",
        }
    }
}
