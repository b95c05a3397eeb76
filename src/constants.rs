pub mod generation {

    pub const SOURCE: &str = "Generation Service";
}

pub mod limits {

    pub const DEFAULT_LIST_LIMIT: u64 = 50;

    pub const CLI_LIST_LIMIT: u64 = 20;
}

pub mod http {

    pub const USER_AGENT: &str = "Sitedraft/1.0";

    pub const POOL_MAX_IDLE_PER_HOST: usize = 10;
}
