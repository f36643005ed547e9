use crate::sarif::{v2, v21};
use crate::types::environment::EnvironmentData;

/// A scan is a single instant, so start and end share the captured timestamp.
pub fn invocations_v2(environment: &EnvironmentData) -> Vec<v2::Invocation> {
    vec![v2::Invocation {
        start_time: environment.timestamp.clone(),
        end_time: environment.timestamp.clone(),
    }]
}

pub fn invocations_v21(environment: &EnvironmentData) -> Vec<v21::Invocation> {
    vec![v21::Invocation {
        start_time_utc: environment.timestamp.clone(),
        end_time_utc: environment.timestamp.clone(),
        execution_successful: true,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_times_match_environment_timestamp() {
        let env = EnvironmentData::new("https://example.com", "Example", "2019-03-22T19:12:18Z");
        let v2 = invocations_v2(&env);
        assert_eq!(v2.len(), 1);
        assert_eq!(v2[0].start_time, "2019-03-22T19:12:18Z");
        assert_eq!(v2[0].end_time, v2[0].start_time);

        let v21 = invocations_v21(&env);
        assert!(v21[0].execution_successful);
        assert_eq!(v21[0].end_time_utc, "2019-03-22T19:12:18Z");
    }
}
