pub const SHELF_STYLES: &str = r#"
:root {
    --bg-primary: #111827;
    --bg-secondary: #1f2937;
    --bg-deep: #030712;
    --text-primary: #f9fafb;
    --text-secondary: #d1d5db;
    --text-muted: #9ca3af;
    --accent-bg: #4f46e5;
    --accent-bg-hover: #4338ca;
    --border-color: #374151;
    --input-bg: #374151;
    --danger-bg: #dc2626;
    --danger-bg-hover: #b91c1c;
}

body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
}

.shelf {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    background: var(--bg-primary);
    color: var(--text-primary);
}

/* Header */
.shelf-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 1.5rem;
    background: linear-gradient(to right, #2563eb, #4f46e5);
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.4);
}

.shelf-header h1 {
    margin: 0;
    font-size: 1.875rem;
}

.shelf-header p {
    margin: 0;
    font-size: 0.875rem;
    color: #dbeafe;
}

.add-button {
    padding: 0.5rem 1rem;
    background: white;
    color: var(--accent-bg);
    font-weight: 600;
    border: none;
    border-radius: 0.5rem;
    cursor: pointer;
}

.add-button:hover {
    background: #eff6ff;
}

/* Body Layout */
.shelf-body {
    flex: 1;
    display: flex;
    overflow: hidden;
}

.category-sidebar {
    width: 18rem;
    flex-shrink: 0;
    padding: 1rem;
    background: var(--bg-secondary);
    border-right: 1px solid var(--border-color);
    overflow-y: auto;
    box-sizing: border-box;
}

.category-sidebar h2 {
    margin: 0 0 1rem 0;
    padding: 0 0.5rem;
    font-size: 1.125rem;
    color: var(--text-secondary);
}

.sidebar-loading {
    padding: 2rem 0;
    text-align: center;
    color: var(--text-muted);
}

.category-button {
    display: block;
    width: 100%;
    margin-bottom: 0.5rem;
    padding: 0.75rem 1rem;
    text-align: left;
    background: transparent;
    color: var(--text-secondary);
    border: none;
    border-radius: 0.375rem;
    cursor: pointer;
}

.category-button:hover {
    background: var(--input-bg);
    color: var(--text-primary);
}

.category-button.selected {
    background: var(--accent-bg);
    color: white;
}

.category-name {
    margin: 0;
    font-weight: 500;
}

.category-count {
    margin: 0;
    font-size: 0.75rem;
    opacity: 0.75;
}

/* Link Grid */
.link-panel {
    flex: 1;
    display: flex;
    flex-direction: column;
    background: var(--bg-deep);
    overflow: hidden;
}

.link-panel-header {
    padding: 1rem 1.5rem;
    background: var(--bg-secondary);
    border-bottom: 1px solid var(--border-color);
}

.link-panel-header h2 {
    margin: 0;
    font-size: 1.5rem;
}

.link-panel-header p {
    margin: 0;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.link-grid {
    flex: 1;
    overflow-y: auto;
    padding: 1.5rem;
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
    gap: 1rem;
    align-content: start;
}

.link-card {
    padding: 1rem;
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
}

.link-card:hover {
    border-color: var(--accent-bg);
}

.link-card a {
    display: block;
    margin-bottom: 0.75rem;
    color: inherit;
    text-decoration: none;
}

.link-title {
    margin: 0;
    font-weight: 600;
    overflow: hidden;
    text-overflow: ellipsis;
    white-space: nowrap;
}

.link-card a:hover .link-title {
    color: #818cf8;
}

.link-url {
    margin: 0.5rem 0 0 0;
    font-size: 0.75rem;
    color: var(--text-muted);
    overflow: hidden;
    text-overflow: ellipsis;
    white-space: nowrap;
}

.link-actions {
    display: flex;
    justify-content: flex-end;
    gap: 0.25rem;
    padding-top: 0.75rem;
    border-top: 1px solid var(--border-color);
}

.link-action {
    padding: 0.25rem 0.5rem;
    border: none;
    border-radius: 0.25rem;
    color: white;
    font-size: 0.75rem;
    cursor: pointer;
}

.link-action.edit {
    background: #2563eb;
}

.link-action.delete {
    background: var(--danger-bg);
}

.empty-panel {
    flex: 1;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.125rem;
    color: var(--text-muted);
}

/* Modals */
.modal-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 50;
}

.modal {
    width: 100%;
    max-width: 28rem;
    margin: 0 1rem;
    background: var(--bg-secondary);
    border-radius: 0.5rem;
    box-shadow: 0 10px 40px rgba(0, 0, 0, 0.5);
}

.modal.narrow {
    max-width: 24rem;
}

.modal-header {
    padding: 1rem 1.5rem;
    border-radius: 0.5rem 0.5rem 0 0;
    background: linear-gradient(to right, #2563eb, #4f46e5);
}

.modal-header.danger {
    background: linear-gradient(to right, var(--danger-bg), var(--danger-bg-hover));
}

.modal-header h2 {
    margin: 0;
    font-size: 1.25rem;
}

.modal-body {
    padding: 1.5rem;
}

.form-error {
    margin-bottom: 1rem;
    padding: 0.5rem 1rem;
    background: rgba(239, 68, 68, 0.1);
    border: 1px solid #ef4444;
    border-radius: 0.25rem;
    color: #f87171;
}

.form-field {
    margin-bottom: 1rem;
}

.form-field label {
    display: block;
    margin-bottom: 0.5rem;
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--text-secondary);
}

.form-field input,
.form-field select,
.form-field textarea {
    width: 100%;
    padding: 0.5rem 1rem;
    background: var(--input-bg);
    color: white;
    border: 1px solid #4b5563;
    border-radius: 0.375rem;
    box-sizing: border-box;
    font: inherit;
}

.form-field input + input {
    margin-top: 0.5rem;
}

.modal-buttons {
    display: flex;
    gap: 0.75rem;
    padding-top: 1rem;
}

.modal-buttons.footer {
    padding: 1rem 1.5rem;
    border-top: 1px solid var(--border-color);
}

.modal-buttons button {
    flex: 1;
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 0.375rem;
    font-weight: 500;
    color: white;
    cursor: pointer;
}

.modal-buttons button:disabled {
    opacity: 0.5;
    cursor: default;
}

.button-secondary {
    background: var(--input-bg);
}

.button-primary {
    background: var(--accent-bg);
}

.button-danger {
    background: var(--danger-bg);
}

.delete-message {
    margin: 0;
    color: var(--text-secondary);
}

.delete-message strong {
    color: white;
    word-break: break-word;
}

.delete-warning {
    margin: 0.5rem 0 0 0;
    font-size: 0.875rem;
    color: var(--text-muted);
}
"#;
