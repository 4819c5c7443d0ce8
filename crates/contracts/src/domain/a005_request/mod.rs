pub mod dto;

pub use dto::{
    CandidateInfo, RequestSummary, RequestsResponse, ResignationRequest, WorkflowName,
    WorkplaceChangeRequest,
};
