// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use std::cmp::Ordering as CmpOrdering;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use user_service::domain::errors::{DomainError, DomainResult};
use user_service::domain::user::{
    Email, NewUser, SortDirection, User, UserFilter, UserId, UserListQuery, UserRepository,
    UserSearchQuery, UserSort, UserSortField,
};

/// インメモリのユーザーリポジトリ。
///
/// メールアドレスの一意性と、フィルタ・ソート・ページングの意味を
/// Postgres 実装と揃えている。
#[derive(Default)]
pub struct InMemoryUserRepo {
    state: Mutex<State>,
    get_calls: AtomicUsize,
    stale_email_lookup: AtomicBool,
}

#[derive(Default)]
struct State {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

fn email_conflict() -> DomainError {
    DomainError::Conflict("user with this email already exists".into())
}

// ILIKE '%kw%' 相当（name または email）
fn keyword_matches(keyword: &str, user: &User) -> bool {
    let needle = keyword.to_lowercase();
    user.name.as_str().to_lowercase().contains(&needle)
        || user.email.as_str().to_lowercase().contains(&needle)
}

// WHERE 句相当
fn filter_matches(filter: &UserFilter, user: &User) -> bool {
    let age = user.age.value();
    filter
        .keyword()
        .is_none_or(|keyword| keyword_matches(keyword, user))
        && filter.age_min().is_none_or(|min| age >= min)
        && filter.age_max().is_none_or(|max| age <= max)
}

// ORDER BY <field> <dir>, id ASC 相当
fn compare(sort: UserSort, a: &User, b: &User) -> CmpOrdering {
    let primary = match sort.field {
        UserSortField::Id => i64::from(a.id).cmp(&i64::from(b.id)),
        UserSortField::Name => a.name.as_str().cmp(b.name.as_str()),
        UserSortField::Email => a.email.as_str().cmp(b.email.as_str()),
        UserSortField::Age => a.age.cmp(&b.age),
        UserSortField::CreatedAt => a.created_at.cmp(&b.created_at),
    };
    let primary = match sort.direction {
        SortDirection::Asc => primary,
        SortDirection::Desc => primary.reverse(),
    };
    primary.then_with(|| i64::from(a.id).cmp(&i64::from(b.id)))
}

fn paginate(mut users: Vec<User>, sort: UserSort, offset: u64, limit: u32) -> (Vec<User>, u64) {
    let total = users.len() as u64;
    users.sort_by(|a, b| compare(sort, a, b));
    let page = users
        .into_iter()
        .skip(usize::try_from(offset).unwrap())
        .take(limit as usize)
        .collect();
    (page, total)
}

impl InMemoryUserRepo {
    /// 保存済みのユーザー（ハッシュ込み）
    pub fn stored(&self, id: i64) -> Option<User> {
        self.state.lock().unwrap().users.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }

    /// true の間 `find_by_email` は常に None を返す。
    /// 事前チェックをすり抜けた同時登録を再現し、一意制約だけが衝突を検出する。
    pub fn set_stale_email_lookup(&self, stale: bool) {
        self.stale_email_lookup.store(stale, Ordering::SeqCst);
    }

    /// `get_by_id` がストアまで到達した回数
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        if state.users.values().any(|u| u.email == new_user.email) {
            return Err(email_conflict());
        }

        state.last_id += 1;
        let id = state.last_id;
        let user = User {
            id: UserId::new(id)?,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            age: new_user.age,
            created_at: new_user.created_at,
            updated_at: new_user.updated_at,
        };
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> DomainResult<User> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.state
            .lock()
            .unwrap()
            .users
            .get(&i64::from(id))
            .cloned()
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        if self.stale_email_lookup.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let state = self.state.lock().unwrap();
        Ok(state.users.values().find(|u| &u.email == email).cloned())
    }

    async fn update(&self, user: &User) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        let key = i64::from(user.id);
        if !state.users.contains_key(&key) {
            return Err(DomainError::NotFound("user not found".into()));
        }
        if state
            .users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(email_conflict());
        }
        state.users.insert(key, user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .users
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }

    async fn list(&self, query: &UserListQuery) -> DomainResult<(Vec<User>, u64)> {
        let matching = self
            .state
            .lock()
            .unwrap()
            .users
            .values()
            .filter(|u| filter_matches(&query.filter, u))
            .cloned()
            .collect();
        Ok(paginate(
            matching,
            query.sort,
            query.page.offset(),
            query.page.limit(),
        ))
    }

    async fn search(&self, query: &UserSearchQuery) -> DomainResult<(Vec<User>, u64)> {
        let matching = self
            .state
            .lock()
            .unwrap()
            .users
            .values()
            .filter(|u| keyword_matches(query.keyword(), u))
            .cloned()
            .collect();
        Ok(paginate(
            matching,
            UserSort::default(),
            query.page.offset(),
            query.page.limit(),
        ))
    }
}
