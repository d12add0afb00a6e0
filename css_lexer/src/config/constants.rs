pub mod compile_time {
    pub mod file_processing {
        /// Maximum stylesheet size accepted by the file processor (10MB)
        pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

        /// Threshold for considering a stylesheet "large" (1MB)
        pub const LARGE_FILE_THRESHOLD: u64 = 1024 * 1024;

        /// Extension checked when `.css` files are required
        pub const STYLESHEET_EXTENSION: &str = "css";
    }

    pub mod lexical {
        /// Opening comment delimiter
        pub const START_COMMENT: &str = "/*";

        /// Closing comment delimiter
        pub const END_COMMENT: &str = "*/";

        /// Prefix for the producer thread name; the lexer name is appended
        pub const PRODUCER_THREAD_PREFIX: &str = "css-lexer";
    }

    pub mod logging {
        /// Upper bound on events retained by the in-memory logger
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Messages longer than this are truncated before they are logged
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 4_096;
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time::*;

    #[test]
    fn test_limits_are_consistent() {
        assert!(file_processing::LARGE_FILE_THRESHOLD < file_processing::MAX_FILE_SIZE);
        assert_eq!(lexical::START_COMMENT.len(), 2);
        assert_eq!(lexical::END_COMMENT.len(), 2);
        assert!(logging::MAX_LOG_MESSAGE_LENGTH < logging::LOG_BUFFER_SIZE);
    }
}
