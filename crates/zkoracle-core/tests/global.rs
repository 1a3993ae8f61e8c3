use zkoracle_core::{global, AttestError, KeyConfig, KeyError};

// One test per binary: the installed signer is process-wide.
#[test]
fn install_is_a_one_time_barrier() {
    assert!(matches!(
        global::installed(),
        Err(AttestError::KeyUninitialized)
    ));

    assert_eq!(
        global::install(&KeyConfig::default().require_key(true)).unwrap_err(),
        KeyError::Missing
    );
    assert!(global::installed().is_err());

    let installed = global::install(&KeyConfig::default()).unwrap();
    assert!(installed.is_insecure_default());

    let again = global::install(&KeyConfig::with_private_key("ignored")).unwrap();
    assert!(std::ptr::eq(installed, again));
    assert!(std::ptr::eq(installed, global::installed().unwrap()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                global::installed()
                    .map(|signer| signer.public_key_base58().to_string())
                    .unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), installed.public_key_base58());
    }
}
