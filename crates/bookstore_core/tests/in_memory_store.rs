use bookstore_core::{
    Book, BookService, InMemoryBookRepository, InMemoryUserRepository, RepoError, RepoResult,
    User, UserRepository, UserService,
};
use std::sync::{Arc, Mutex};
use std::thread;

fn seeded_catalog() -> InMemoryBookRepository {
    InMemoryBookRepository::from_books(vec![
        Book::new("Book1", "Author1", "Mystery", 20.95),
        Book::new("Book2", "Author1", "Fantasy", 25.50),
        Book::new("Book3", "Author3", "Mystery", 12.00),
    ])
}

#[test]
fn adding_equal_book_twice_appends_once() {
    let mut service = BookService::new(InMemoryBookRepository::new());
    let book = Book::new("Book1", "author1", "Mystery", 20.00);

    assert!(service.add_book(book.clone()));
    assert!(!service.add_book(book.clone()));
    assert_eq!(service.repo().books(), &[book]);
}

#[test]
fn search_covers_all_three_fields_in_catalog_order() {
    let service = BookService::new(seeded_catalog());

    let mysteries: Vec<String> = service
        .search_book("Mystery")
        .into_iter()
        .map(|book| book.title)
        .collect();
    assert_eq!(mysteries, vec!["Book1", "Book3"]);

    assert_eq!(service.search_book("Author1").len(), 2);
    assert_eq!(service.search_book("Book2").len(), 1);
}

#[test]
fn removed_book_can_no_longer_be_purchased() {
    let mut service = BookService::new(seeded_catalog());
    let book = Book::new("Book3", "Author3", "Mystery", 12.00);
    let mut user = User::with_balance("reader", "pw", "reader@example.com", 50.0);

    assert!(service.remove_book(Some(&book)));
    assert!(!service.remove_book(Some(&book)));
    assert!(!service.purchase_book(&mut user, &book));
    assert_eq!(user.balance, 50.0);
}

#[test]
fn purchase_then_review_flow() {
    let mut service = BookService::new(seeded_catalog());
    let mut book = Book::new("Book1", "Author1", "Mystery", 20.95);
    let mut user = User::with_balance("reader", "pw", "reader@example.com", 30.0);

    assert!(!service.add_book_review(&user, &mut book, "Loved it"));
    assert!(service.purchase_book(&mut user, &book));
    assert!((user.balance - 9.05).abs() < 1e-9);
    assert!(service.add_book_review(&user, &mut book, "Loved it"));
    assert!(service.add_book_review(&user, &mut book, "Second look"));
    assert_eq!(book.reviews(), &["Loved it", "Second look"]);
}

#[test]
fn review_of_searched_book_is_visible_in_catalog() {
    let mut service = BookService::new(seeded_catalog());
    let mut user = User::with_balance("reader", "pw", "reader@example.com", 30.0);

    let mut book = service.search_book("Book1").remove(0);
    assert!(service.purchase_book(&mut user, &book));
    assert!(service.add_book_review(&user, &mut book, "Good read!"));

    let listed = service.search_book("Book1");
    assert_eq!(listed[0].reviews(), &["Good read!"]);
    assert_eq!(book.reviews(), &["Good read!"]);
    // Reviews stay attached after further reviews from the same search result.
    let mut again = service.search_book("Book1").remove(0);
    assert!(service.add_book_review(&user, &mut again, "Still good"));
    assert_eq!(
        service.search_book("Book1")[0].reviews(),
        &["Good read!", "Still good"]
    );
}

#[test]
fn negative_price_seeded_book_cannot_be_purchased() {
    let bogus = Book::new("Refund", "Nobody", "Scam", -15.0);
    let service = BookService::new(InMemoryBookRepository::from_books(vec![bogus.clone()]));
    let mut user = User::with_balance("reader", "pw", "reader@example.com", 10.0);

    assert!(!service.purchase_book(&mut user, &bogus));
    assert_eq!(user.balance, 10.0);
}

#[test]
fn register_login_update_round() {
    let mut service = UserService::new(InMemoryUserRepository::new());
    let mut user = User::new("user1", "abcd1234", "user1@gmail.com");

    assert!(service.register_user(user.clone()));
    assert!(!service.register_user(user.clone()));
    assert_eq!(service.login_user("user1", "abcd1234"), Some(user.clone()));

    assert!(service.update_user_profile(&mut user, "user2", "1234abcd", "user2@gmail.com"));
    let users = service.repo().users();
    assert_eq!(users.len(), 1);
    assert!(!users.contains_key("user1"));
    assert_eq!(users.get("user2"), Some(&user));

    assert!(service.login_user("user1", "abcd1234").is_none());
    assert_eq!(service.login_user("user2", "1234abcd"), Some(user));
}

#[test]
fn update_to_own_current_username_is_rejected() {
    let mut service = UserService::new(InMemoryUserRepository::new());
    let mut user = User::new("user1", "abcd1234", "user1@gmail.com");
    assert!(service.register_user(user.clone()));

    assert!(!service.update_user_profile(&mut user, "user1", "new", "new@gmail.com"));
    assert_eq!(user.password, "abcd1234");
    assert_eq!(
        service.repo().users().get("user1").map(|u| u.email.as_str()),
        Some("user1@gmail.com")
    );
}

#[test]
fn update_of_unregistered_user_keeps_new_entry() {
    let mut service = UserService::new(InMemoryUserRepository::new());
    let mut user = User::new("ghost", "pw", "ghost@example.com");

    assert!(service.update_user_profile(&mut user, "ghost", "pw2", "ghost2@example.com"));
    assert_eq!(service.repo().users().get("ghost"), Some(&user));
}

#[test]
fn locked_service_serializes_racing_duplicate_adds() {
    let service = Arc::new(Mutex::new(BookService::new(InMemoryBookRepository::new())));

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                // Two workers per title.
                let title = format!("Title{}", worker % 4);
                service
                    .lock()
                    .unwrap()
                    .add_book(Book::new(title, "Author", "Genre", 10.0))
            })
        })
        .collect();

    let added = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|added| *added)
        .count();
    assert_eq!(added, 4);
    assert_eq!(service.lock().unwrap().repo().len(), 4);
}

#[test]
fn shared_catalog_is_visible_across_services() {
    let shared = Arc::new(Mutex::new(InMemoryBookRepository::new()));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let repo = Arc::clone(&shared);
            thread::spawn(move || {
                let mut service = BookService::new(repo);
                service.add_book(Book::new(format!("Title{worker}"), "Author", "Genre", 10.0))
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }

    let reader = BookService::new(Arc::clone(&shared));
    assert_eq!(reader.search_book("Author").len(), 4);
    assert_eq!(shared.lock().unwrap().len(), 4);
}

struct StaleKeyPinnedRepository {
    inner: InMemoryUserRepository,
}

impl UserRepository for StaleKeyPinnedRepository {
    fn contains_username(&self, username: &str) -> RepoResult<bool> {
        self.inner.contains_username(username)
    }

    fn get_user(&self, username: &str) -> RepoResult<Option<User>> {
        self.inner.get_user(username)
    }

    fn put_user(&mut self, username: String, user: User) -> RepoResult<Option<User>> {
        self.inner.put_user(username, user)
    }

    fn remove_user(&mut self, username: &str) -> RepoResult<Option<User>> {
        if username == "user1" {
            return Err(RepoError::Unavailable("entry pinned".to_string()));
        }
        self.inner.remove_user(username)
    }
}

#[test]
fn failed_stale_key_removal_keeps_single_original_entry() {
    let mut service = UserService::new(StaleKeyPinnedRepository {
        inner: InMemoryUserRepository::new(),
    });
    let mut user = User::new("user1", "abcd1234", "user1@gmail.com");
    assert!(service.register_user(user.clone()));

    assert!(!service.update_user_profile(&mut user, "user2", "1234abcd", "user2@gmail.com"));
    assert_eq!(user.username, "user1");

    let users = service.repo().inner.users();
    let mut keys: Vec<&String> = users.keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["user1"]);
    assert_eq!(service.login_user("user1", "abcd1234"), Some(user));
    assert!(service.login_user("user2", "1234abcd").is_none());
}

#[test]
fn poisoned_shared_store_reports_lock_error() {
    let shared = Arc::new(Mutex::new(InMemoryUserRepository::new()));
    let poisoner = Arc::clone(&shared);
    let _ = thread::spawn(move || {
        let _guard = poisoner.lock().unwrap();
        panic!("poison the user store");
    })
    .join();

    assert_eq!(
        shared.contains_username("user1"),
        Err(RepoError::LockPoisoned("user"))
    );

    let mut service = UserService::new(Arc::clone(&shared));
    assert!(!service.register_user(User::new("user1", "pw", "user1@gmail.com")));
    assert!(service.login_user("user1", "pw").is_none());
}
