mod postgres;

pub use postgres::PostgresUserRepository;
