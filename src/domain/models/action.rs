use super::GenerateRequest;

pub enum Action {
    FetchHistory(),
    GeneratePlan(GenerateRequest),
}
