pub const ADMIN_STYLES: &str = r#"
:root {
    --accent: #3b82f6;
    --bg: #0a0f1a;
    --surface: #0f172a;
    --text: #f1f5f9;
    --text-secondary: #94a3b8;
    --success: #22c55e;
    --warning: #f59e0b;
    --error: #ef4444;
    --border: color-mix(in srgb, var(--text-secondary) 25%, transparent);
}

*, *::before, *::after { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
}

a { color: var(--accent); text-decoration: none; }
a:hover { text-decoration: underline; }

/* Generic cards (home, login, admin landing) */
.page-center {
    min-height: 100vh;
    display: flex;
    align-items: flex-start;
    justify-content: center;
    padding: 6rem 1rem 2rem;
}

.card {
    width: 100%;
    max-width: 420px;
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 2rem;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.card h1 { margin: 0; font-size: 1.25rem; }
.card p { margin: 0; color: var(--text-secondary); font-size: 0.9rem; }

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.4rem;
    padding: 0.55rem 1rem;
    border-radius: 8px;
    border: 1px solid var(--border);
    background: transparent;
    color: var(--text);
    font-size: 0.9rem;
    cursor: pointer;
}
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-primary { background: var(--accent); border-color: var(--accent); color: #fff; }
.btn-small { padding: 0.3rem 0.6rem; font-size: 0.8rem; }

.error-text { color: var(--error); font-size: 0.85rem; }
.muted { color: var(--text-secondary); font-size: 0.85rem; }

.spinner {
    width: 28px;
    height: 28px;
    border: 3px solid var(--border);
    border-top-color: var(--accent);
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }

/* Settings layout */
.admin-settings {
    display: flex;
    min-height: 100vh;
}

.admin-sidebar {
    width: 260px;
    flex-shrink: 0;
    background: var(--surface);
    border-right: 1px solid var(--border);
    display: flex;
    flex-direction: column;
}

.sidebar-header {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem;
    border-bottom: 1px solid var(--border);
}
.sidebar-header h2 { margin: 0; font-size: 1rem; flex: 1; }

.sidebar-nav { padding: 0.5rem; overflow-y: auto; }

.sidebar-section + .sidebar-section {
    border-top: 1px solid var(--border);
    margin-top: 0.5rem;
    padding-top: 0.5rem;
}


.sidebar-item {
    width: 100%;
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 0.6rem;
    border: none;
    border-radius: 6px;
    background: transparent;
    color: var(--text);
    text-align: left;
    font-size: 0.9rem;
    cursor: pointer;
}
.sidebar-item:hover { background: color-mix(in srgb, var(--accent) 10%, transparent); }
.sidebar-item.active { background: color-mix(in srgb, var(--accent) 20%, transparent); color: var(--accent); }
.sidebar-item .label { flex: 1; }

.badge {
    min-width: 1.4rem;
    padding: 0 0.35rem;
    border-radius: 999px;
    background: var(--accent);
    color: #fff;
    font-size: 0.7rem;
    text-align: center;
}

.icon-btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 32px;
    height: 32px;
    border: none;
    border-radius: 6px;
    background: transparent;
    color: var(--text-secondary);
    cursor: pointer;
}
.icon-btn:hover { color: var(--text); }
.icon-btn.star-on { color: var(--warning); }

.mobile-only { display: none; }

.admin-main {
    flex: 1;
    min-width: 0;
    display: flex;
    flex-direction: column;
}

.main-header {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1rem 1.5rem;
    border-bottom: 1px solid var(--border);
    flex-wrap: wrap;
}
.main-header h1 { margin: 0; font-size: 1.15rem; flex: 1; }

.search-box {
    position: relative;
    display: flex;
    align-items: center;
    width: 320px;
    max-width: 100%;
}
.search-box input {
    width: 100%;
    padding: 0.5rem 2rem 0.5rem 2rem;
    border-radius: 8px;
    border: 1px solid var(--border);
    background: var(--bg);
    color: var(--text);
}
.search-box .search-icon { position: absolute; left: 0.5rem; color: var(--text-secondary); }
.search-box .clear { position: absolute; right: 0.1rem; }
.search-mobile { display: none; padding: 0 1.5rem 0.75rem; }

.search-summary { padding: 0.75rem 1.5rem 0; font-size: 0.85rem; color: var(--text-secondary); }
.search-summary strong { color: var(--text); }

.admin-content { padding: 1.5rem; display: flex; flex-direction: column; gap: 1.5rem; }

.category-group h3 {
    margin: 0 0 0.5rem;
    font-size: 0.8rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: var(--text-secondary);
}

.setting-row {
    display: flex;
    gap: 1rem;
    padding: 0.9rem 1rem;
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 10px;
    margin-bottom: 0.5rem;
}
.setting-row.modified { border-color: color-mix(in srgb, var(--accent) 50%, transparent); }
.setting-info { flex: 1; min-width: 0; display: flex; flex-direction: column; gap: 0.2rem; }
.setting-name { font-weight: 600; font-size: 0.92rem; }
.setting-key { font-family: ui-monospace, monospace; font-size: 0.72rem; color: var(--text-secondary); }
.setting-description { font-size: 0.82rem; color: var(--text-secondary); }
.setting-warning { font-size: 0.8rem; color: var(--warning); }
.setting-tag { font-size: 0.7rem; color: var(--accent); }
.setting-editor { display: flex; align-items: center; gap: 0.5rem; flex-wrap: wrap; justify-content: flex-end; }
.setting-editor input[type="text"], .setting-editor select, .form-field input {
    padding: 0.4rem 0.6rem;
    border-radius: 6px;
    border: 1px solid var(--border);
    background: var(--bg);
    color: var(--text);
    min-width: 180px;
}

.toggle { position: relative; width: 40px; height: 22px; }
.toggle input { opacity: 0; width: 0; height: 0; }
.toggle .track {
    position: absolute;
    inset: 0;
    border-radius: 999px;
    background: var(--border);
    cursor: pointer;
    transition: background 0.15s;
}
.toggle .track::after {
    content: "";
    position: absolute;
    top: 3px;
    left: 3px;
    width: 16px;
    height: 16px;
    border-radius: 50%;
    background: #fff;
    transition: transform 0.15s;
}
.toggle input:checked + .track { background: var(--accent); }
.toggle input:checked + .track::after { transform: translateX(18px); }

.form-field { display: flex; flex-direction: column; gap: 0.3rem; font-size: 0.85rem; }

.branding-preview {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1rem;
    border: 1px dashed var(--border);
    border-radius: 10px;
}
.logo-letter {
    width: 40px;
    height: 40px;
    border-radius: 10px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
    color: #fff;
}
.logo-letter img { width: 100%; height: 100%; border-radius: 10px; object-fit: cover; }

.color-row { display: flex; align-items: center; gap: 0.75rem; padding: 0.4rem 0; }
.color-row label { flex: 1; font-size: 0.9rem; }
.color-row input[type="color"] { width: 40px; height: 28px; border: none; background: none; padding: 0; }
.color-row input[type="text"] { width: 110px; font-family: ui-monospace, monospace; }

.empty-state { padding: 3rem 1rem; text-align: center; color: var(--text-secondary); }

.overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    z-index: 40;
}

@media (max-width: 900px) {
    .admin-sidebar {
        position: fixed;
        top: 0;
        bottom: 0;
        left: 0;
        z-index: 50;
        transform: translateX(-100%);
        transition: transform 0.2s;
    }
    .admin-sidebar.open { transform: translateX(0); }
    .mobile-only { display: inline-flex; }
    .search-desktop { display: none; }
    .search-mobile { display: block; }
    .search-mobile .search-box { width: 100%; }
    .setting-row { flex-direction: column; }
    .setting-editor { justify-content: flex-start; }
}
"#;
